use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Productos::Table)
                    .if_not_exists()
                    .col(pk_auto(Productos::Id))
                    .col(string_len(Productos::Nombre, 100))
                    .col(string_len(Productos::Descripcion, 500))
                    .col(decimal_len(Productos::Precio, 18, 2))
                    .to_owned(),
            )
            .await?;

        // Range filtering sorts and scans on precio
        manager
            .create_index(
                Index::create()
                    .name("idx_productos_precio")
                    .table(Productos::Table)
                    .col(Productos::Precio)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Productos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Productos {
    Table,
    Id,
    Nombre,
    Descripcion,
    Precio,
}

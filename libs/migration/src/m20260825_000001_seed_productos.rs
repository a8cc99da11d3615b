use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Insert sample productos with fixed ids, then bump the sequence so
        // new inserts never collide with the seeded rows
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO productos (id, nombre, descripcion, precio)
            VALUES
                (1, 'Laptop', 'Laptop de alta gama', 1200.00),
                (2, 'Mouse', 'Mouse inalámbrico', 25.99),
                (3, 'Teclado', 'Teclado mecánico', 89.99)
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
            SELECT setval(
                pg_get_serial_sequence('productos', 'id'),
                GREATEST((SELECT COALESCE(MAX(id), 1) FROM productos), 1)
            )
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM productos WHERE id IN (1, 2, 3)")
            .await?;

        Ok(())
    }
}

pub use sea_orm_migration::prelude::*;

mod m20260825_000000_create_productos;
mod m20260825_000001_seed_productos;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260825_000000_create_productos::Migration),
            Box::new(m20260825_000001_seed_productos::Migration),
        ]
    }
}

//! Migrator holding the one-time schema setup for the donation database.
pub use sea_orm_migration::prelude::*;

mod m20250205_000001_create_candidate;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250205_000001_create_candidate::Migration)]
    }
}

pub use sea_orm_migration::prelude::*;

mod m20220421_000001_create_feedback_table;
mod m20220421_000002_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220421_000001_create_feedback_table::Migration),
            Box::new(m20220421_000002_create_user_table::Migration),
        ]
    }
}

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_ai_model_table;
mod m20260301_000003_create_professor_agent_table;
mod m20260301_000004_create_professor_agent_token_table;
mod m20260301_000005_seed_ai_models;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_ai_model_table::Migration),
            Box::new(m20260301_000003_create_professor_agent_table::Migration),
            Box::new(m20260301_000004_create_professor_agent_token_table::Migration),
            Box::new(m20260301_000005_seed_ai_models::Migration),
        ]
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// A single catalog entry.
struct CatalogEntry {
    name: &'static str,
    display_name: &'static str,
    provider: &'static str,
    tier: i32,
}

#[rustfmt::skip]
const MODELS: &[CatalogEntry] = &[
    CatalogEntry { name: "gpt-4o-mini", display_name: "GPT-4o mini", provider: "openai", tier: 1 },
    CatalogEntry { name: "gpt-4.1-mini", display_name: "GPT-4.1 mini", provider: "openai", tier: 1 },
    CatalogEntry { name: "gpt-4o",      display_name: "GPT-4o",      provider: "openai", tier: 2 },
    CatalogEntry { name: "gpt-4.1",     display_name: "GPT-4.1",     provider: "openai", tier: 3 },
];

const SEEDED_AT: &str = "2026-03-01T00:00:00+00:00";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let backend = manager.get_database_backend();

        for model in MODELS {
            let sql = if backend == sea_orm::DatabaseBackend::Postgres {
                format!(
                    "INSERT INTO ai_model (name, display_name, provider, tier, is_active, created_at) \
                     VALUES ('{name}', '{display_name}', '{provider}', {tier}, TRUE, '{SEEDED_AT}') \
                     ON CONFLICT (name) DO NOTHING",
                    name = model.name,
                    display_name = model.display_name,
                    provider = model.provider,
                    tier = model.tier,
                )
            } else {
                format!(
                    "INSERT OR IGNORE INTO ai_model (name, display_name, provider, tier, is_active, created_at) \
                     VALUES ('{name}', '{display_name}', '{provider}', {tier}, 1, '{SEEDED_AT}')",
                    name = model.name,
                    display_name = model.display_name,
                    provider = model.provider,
                    tier = model.tier,
                )
            };
            db.execute(sea_orm::Statement::from_string(backend, sql))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(AiModelIden::Table)
                    .and_where(Expr::col(AiModelIden::Name).is_in(MODELS.iter().map(|m| m.name)))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum AiModelIden {
    #[sea_orm(iden = "ai_model")]
    Table,
    Name,
}

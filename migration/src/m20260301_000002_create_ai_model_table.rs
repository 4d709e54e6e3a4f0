use sea_orm_migration::prelude::*;

/// Creates the `ai_model` catalog table.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum AiModel {
    Table,
    Id,
    Name,
    DisplayName,
    Provider,
    Tier,
    IsActive,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AiModel::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AiModel::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AiModel::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AiModel::DisplayName).string_len(100).not_null())
                    .col(ColumnDef::new(AiModel::Provider).string_len(50).not_null())
                    .col(
                        ColumnDef::new(AiModel::Tier)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(AiModel::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AiModel::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AiModel::Table).to_owned())
            .await
    }
}

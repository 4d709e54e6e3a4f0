use sea_orm_migration::prelude::*;

/// Creates the `professor_agent_token` table holding widget access tokens.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ProfessorAgentToken {
    Table,
    Id,
    ProfessorAgentId,
    ProfessorId,
    Token,
    Name,
    Description,
    AllowChat,
    ExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProfessorAgent {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfessorAgentToken::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfessorAgentToken::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgentToken::ProfessorAgentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgentToken::ProfessorId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgentToken::Token)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgentToken::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgentToken::Description)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgentToken::AllowChat)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgentToken::ExpiresAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgentToken::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_professor_agent_token_agent_id")
                            .from(
                                ProfessorAgentToken::Table,
                                ProfessorAgentToken::ProfessorAgentId,
                            )
                            .to(ProfessorAgent::Table, ProfessorAgent::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_professor_agent_token_agent_id")
                    .table(ProfessorAgentToken::Table)
                    .col(ProfessorAgentToken::ProfessorAgentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfessorAgentToken::Table).to_owned())
            .await
    }
}

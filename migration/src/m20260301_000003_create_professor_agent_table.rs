use sea_orm_migration::prelude::*;

/// Creates the `professor_agent` table.
///
/// `professor_id` carries a unique key: a professor owns at most one agent row,
/// soft-deleted rows included.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ProfessorAgent {
    Table,
    Id,
    ProfessorId,
    UniversityId,
    Name,
    Description,
    SystemPrompt,
    AssistantId,
    VectorStoreId,
    TutorLanguage,
    AiModelId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum AiModel {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfessorAgent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfessorAgent::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgent::ProfessorId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgent::UniversityId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgent::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProfessorAgent::Description).text().null())
                    .col(ColumnDef::new(ProfessorAgent::SystemPrompt).text().null())
                    .col(
                        ColumnDef::new(ProfessorAgent::AssistantId)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgent::VectorStoreId)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgent::TutorLanguage)
                            .string_len(10)
                            .not_null()
                            .default("pt-br"),
                    )
                    .col(ColumnDef::new(ProfessorAgent::AiModelId).integer().null())
                    .col(
                        ColumnDef::new(ProfessorAgent::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgent::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorAgent::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_professor_agent_professor_id")
                            .from(ProfessorAgent::Table, ProfessorAgent::ProfessorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_professor_agent_ai_model_id")
                            .from(ProfessorAgent::Table, ProfessorAgent::AiModelId)
                            .to(AiModel::Table, AiModel::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_professor_agent_university_id")
                    .table(ProfessorAgent::Table)
                    .col(ProfessorAgent::UniversityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfessorAgent::Table).to_owned())
            .await
    }
}

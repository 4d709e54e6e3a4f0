use sea_orm_migration::prelude::*;

/// Creates the `user` table shared by professors, students and super admins.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Username,
    Email,
    FirstName,
    LastName,
    PasswordHash,
    UserType,
    UniversityId,
    IsAdmin,
    LanguagePreference,
    ThemePreference,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(User::Username)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(User::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(User::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(User::LastName).string_len(100).not_null())
                    .col(ColumnDef::new(User::PasswordHash).string_len(255).null())
                    .col(ColumnDef::new(User::UserType).string_len(20).not_null())
                    .col(ColumnDef::new(User::UniversityId).integer().null())
                    .col(ColumnDef::new(User::IsAdmin).boolean().null())
                    .col(
                        ColumnDef::new(User::LanguagePreference)
                            .string_len(10)
                            .not_null()
                            .default("pt-br"),
                    )
                    .col(
                        ColumnDef::new(User::ThemePreference)
                            .string_len(20)
                            .not_null()
                            .default("light"),
                    )
                    .col(
                        ColumnDef::new(User::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(User::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_university_id")
                    .table(User::Table)
                    .col(User::UniversityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

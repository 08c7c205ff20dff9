use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::StudentId)
                            .binary_len(16)
                            .not_null()
                            .primary_key(),
                    )
                    .col(string_len(Students::FullName, 100))
                    .col(string(Students::Furigana))
                    .col(string(Students::Nickname))
                    .col(string_uniq(Students::Email))
                    .col(string_null(Students::Location))
                    .col(
                        integer(Students::Age)
                            .default(0)
                            .check(Expr::col(Students::Age).gte(0)),
                    )
                    .col(string(Students::Gender))
                    .col(text_null(Students::Remarks))
                    .col(
                        timestamp(Students::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Students::DeletedAt))
                    .col(boolean(Students::IsDeleted).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_created_at")
                    .table(Students::Table)
                    .col(Students::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Students {
    Table,
    StudentId,
    FullName,
    Furigana,
    Nickname,
    Email,
    Location,
    Age,
    Gender,
    Remarks,
    CreatedAt,
    DeletedAt,
    IsDeleted,
}

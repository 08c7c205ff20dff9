use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000001_create_students_table::Students;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentCourses::CourseId)
                            .binary_len(16)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentCourses::StudentId)
                            .binary_len(16)
                            .not_null(),
                    )
                    .col(string(StudentCourses::CourseName))
                    .col(date(StudentCourses::StartDate))
                    .col(date_null(StudentCourses::EndDate))
                    .col(
                        timestamp(StudentCourses::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_courses_student_id")
                            .from(StudentCourses::Table, StudentCourses::StudentId)
                            .to(Students::Table, Students::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_courses_student_id_course_name")
                    .table(StudentCourses::Table)
                    .col(StudentCourses::StudentId)
                    .col(StudentCourses::CourseName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentCourses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentCourses {
    Table,
    CourseId,
    StudentId,
    CourseName,
    StartDate,
    EndDate,
    CreatedAt,
}

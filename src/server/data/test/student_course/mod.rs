use crate::server::{
    data::student_course::StudentCourseRepository,
    model::course::{Course, CourseParams},
    util::identifier::{self, BinaryId},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod insert_many;

fn course(student_id: BinaryId, name: &str) -> Course {
    Course::enroll(
        student_id,
        CourseParams {
            course_name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            end_date: None,
        },
        Utc::now(),
    )
}

async fn student_id(db: &sea_orm::DatabaseConnection) -> Result<BinaryId, DbErr> {
    let student = factory::create_student(db).await?;

    Ok(identifier::id_from_slice(&student.student_id).unwrap())
}

async fn course_count(db: &sea_orm::DatabaseConnection, student_id: &BinaryId) -> Result<u64, DbErr> {
    entity::prelude::StudentCourse::find()
        .filter(entity::student_course::Column::StudentId.eq(student_id.to_vec()))
        .count(db)
        .await
}

//! Course factory for creating test enrollment entities.

use crate::factory::helpers::{new_binary_id, next_id};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test course enrollments owned by a student.
pub struct StudentCourseFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: Vec<u8>,
    student_id: Vec<u8>,
    course_name: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl<'a> StudentCourseFactory<'a> {
    /// Creates a new StudentCourseFactory with default values.
    ///
    /// Defaults:
    /// - course_name: `"Course {id}"`
    /// - start_date: 2025-04-01
    /// - end_date: `None` (ongoing)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `student_id` - Binary identifier of the owning student
    pub fn new(db: &'a DatabaseConnection, student_id: &[u8]) -> Self {
        let id = next_id();
        Self {
            db,
            course_id: new_binary_id(),
            student_id: student_id.to_vec(),
            course_name: format!("Course {}", id),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap_or_default(),
            end_date: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the course name.
    pub fn course_name(mut self, course_name: impl Into<String>) -> Self {
        self.course_name = course_name.into();
        self
    }

    /// Sets the start date.
    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the end date.
    pub fn end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::student_course::Model, DbErr> {
        entity::student_course::ActiveModel {
            course_id: ActiveValue::Set(self.course_id),
            student_id: ActiveValue::Set(self.student_id),
            course_name: ActiveValue::Set(self.course_name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values for the given student.
pub async fn create_course(
    db: &DatabaseConnection,
    student_id: &[u8],
) -> Result<entity::student_course::Model, DbErr> {
    StudentCourseFactory::new(db, student_id).build().await
}

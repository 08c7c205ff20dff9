use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{model::course::Course, util::identifier::BinaryId};

/// Repository for the `student_courses` table.
pub struct StudentCourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentCourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn active_model(course: &Course) -> entity::student_course::ActiveModel {
        entity::student_course::ActiveModel {
            course_id: ActiveValue::Set(course.id.to_vec()),
            student_id: ActiveValue::Set(course.student_id.to_vec()),
            course_name: ActiveValue::Set(course.course_name.clone()),
            start_date: ActiveValue::Set(course.start_date),
            end_date: ActiveValue::Set(course.end_date),
            created_at: ActiveValue::Set(course.created_at),
        }
    }

    /// Inserts every course in one statement. An empty list is a no-op.
    pub async fn insert_many(&self, courses: &[Course]) -> Result<(), DbErr> {
        if courses.is_empty() {
            return Ok(());
        }

        entity::prelude::StudentCourse::insert_many(courses.iter().map(Self::active_model))
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Inserts a course unless the student already has one with the same name.
    ///
    /// # Returns
    /// - `Ok(true)` - The course was inserted
    /// - `Ok(false)` - A course with this name already exists for the student
    pub async fn insert_if_not_exists(&self, course: &Course) -> Result<bool, DbErr> {
        let existing = entity::prelude::StudentCourse::find()
            .filter(entity::student_course::Column::StudentId.eq(course.student_id.to_vec()))
            .filter(entity::student_course::Column::CourseName.eq(course.course_name.as_str()))
            .count(self.db)
            .await?;

        if existing > 0 {
            return Ok(false);
        }

        Self::active_model(course).insert(self.db).await?;

        Ok(true)
    }

    /// Deletes all courses of a student, returning how many were removed.
    pub async fn delete_by_student(&self, student_id: &BinaryId) -> Result<u64, DbErr> {
        let result = entity::prelude::StudentCourse::delete_many()
            .filter(entity::student_course::Column::StudentId.eq(student_id.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Lists a student's courses in enrollment order.
    pub async fn list_by_student(&self, student_id: &BinaryId) -> Result<Vec<Course>, DbErr> {
        entity::prelude::StudentCourse::find()
            .filter(entity::student_course::Column::StudentId.eq(student_id.to_vec()))
            .order_by_asc(entity::student_course::Column::CreatedAt)
            .order_by_asc(entity::student_course::Column::CourseName)
            .all(self.db)
            .await?
            .into_iter()
            .map(Course::from_entity)
            .collect()
    }

    /// Lists every course of every student, soft-deleted students included.
    ///
    /// Newest enrollments come first.
    pub async fn list_all(&self) -> Result<Vec<Course>, DbErr> {
        entity::prelude::StudentCourse::find()
            .order_by_desc(entity::student_course::Column::CreatedAt)
            .order_by_asc(entity::student_course::Column::CourseName)
            .all(self.db)
            .await?
            .into_iter()
            .map(Course::from_entity)
            .collect()
    }
}

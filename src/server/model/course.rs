//! Course enrollment domain model.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::student::CourseDto,
    server::util::identifier::{self, BinaryId},
};

/// A course a student is enrolled in. Owned by exactly one student.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: BinaryId,
    pub student_id: BinaryId,
    pub course_name: String,
    pub start_date: NaiveDate,
    /// `None` while the course is ongoing.
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Validated course fields from a registration request.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseParams {
    pub course_name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl Course {
    /// Creates a new enrollment with a fresh identifier.
    pub fn enroll(student_id: BinaryId, params: CourseParams, now: DateTime<Utc>) -> Self {
        Self {
            id: identifier::generate_new_identifier_bytes(),
            student_id,
            course_name: params.course_name,
            start_date: params.start_date,
            end_date: params.end_date,
            created_at: now,
        }
    }

    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Course)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - A stored identifier is not 16 bytes
    pub fn from_entity(entity: entity::student_course::Model) -> Result<Self, DbErr> {
        let id = identifier::id_from_slice(&entity.course_id)
            .map_err(|e| DbErr::Custom(format!("Invalid course_id in storage: {}", e)))?;
        let student_id = identifier::id_from_slice(&entity.student_id)
            .map_err(|e| DbErr::Custom(format!("Invalid student_id in storage: {}", e)))?;

        Ok(Self {
            id,
            student_id,
            course_name: entity.course_name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            course_id: identifier::encode_id(&self.id),
            student_id: identifier::encode_id(&self.student_id),
            course_name: self.course_name,
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: self.created_at,
        }
    }
}

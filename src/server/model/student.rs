//! Student domain models, lifecycle transitions and operation parameters.
//!
//! A student is either active or soft-deleted. The deletion timestamp is the single
//! source of truth for that state, so `is_deleted` can never disagree with
//! `deleted_at`. Transitions are pure functions that consume a value and return the
//! next one; persisting the result is the repository's job.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::student::{StudentDetailDto, StudentDto, StudentSearchQueryDto},
    server::{
        model::course::{Course, CourseParams},
        util::identifier::{self, BinaryId},
    },
};

/// A registered student.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: BinaryId,
    pub full_name: String,
    /// Phonetic reading of the full name, used for search.
    pub furigana: String,
    pub nickname: String,
    pub email: String,
    pub location: Option<String>,
    pub age: i32,
    pub gender: String,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Set while the student is soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Mutable student fields, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentFields {
    pub full_name: String,
    pub furigana: String,
    pub nickname: String,
    pub email: String,
    pub location: Option<String>,
    pub age: i32,
    pub gender: String,
    pub remarks: Option<String>,
}

impl Student {
    /// Creates a newly registered, active student.
    pub fn register(id: BinaryId, fields: StudentFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: fields.full_name,
            furigana: fields.furigana,
            nickname: fields.nickname,
            email: fields.email,
            location: fields.location,
            age: fields.age,
            gender: fields.gender,
            remarks: fields.remarks,
            created_at: now,
            deleted_at: None,
        }
    }

    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Student)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Identifier is not 16 bytes or the deletion flag
    ///   disagrees with the deletion timestamp
    pub fn from_entity(entity: entity::student::Model) -> Result<Self, DbErr> {
        let id = identifier::id_from_slice(&entity.student_id)
            .map_err(|e| DbErr::Custom(format!("Invalid student_id in storage: {}", e)))?;

        if entity.is_deleted != entity.deleted_at.is_some() {
            return Err(DbErr::Custom(format!(
                "Student {} has is_deleted={} but deleted_at={:?}",
                identifier::encode_id(&id),
                entity.is_deleted,
                entity.deleted_at
            )));
        }

        Ok(Self {
            id,
            full_name: entity.full_name,
            furigana: entity.furigana,
            nickname: entity.nickname,
            email: entity.email,
            location: entity.location,
            age: entity.age,
            gender: entity.gender,
            remarks: entity.remarks,
            created_at: entity.created_at,
            deleted_at: entity.deleted_at,
        })
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Overwrites every mutable field, leaving identity and deletion state alone.
    pub fn with_fields(self, fields: StudentFields) -> Self {
        Self {
            full_name: fields.full_name,
            furigana: fields.furigana,
            nickname: fields.nickname,
            email: fields.email,
            location: fields.location,
            age: fields.age,
            gender: fields.gender,
            remarks: fields.remarks,
            ..self
        }
    }

    /// Active → soft-deleted. An already deleted student keeps its original timestamp.
    pub fn soft_deleted(self, now: DateTime<Utc>) -> Self {
        if self.is_deleted() {
            return self;
        }

        Self {
            deleted_at: Some(now),
            ..self
        }
    }

    /// Soft-deleted → active.
    pub fn restored(self) -> Self {
        Self {
            deleted_at: None,
            ..self
        }
    }

    /// Moves to the requested deletion state, applying the matching transition.
    pub fn with_deletion(self, deleted: bool, now: DateTime<Utc>) -> Self {
        if deleted {
            self.soft_deleted(now)
        } else {
            self.restored()
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            student_id: identifier::encode_id(&self.id),
            is_deleted: self.is_deleted(),
            full_name: self.full_name,
            furigana: self.furigana,
            nickname: self.nickname,
            email: self.email,
            location: self.location,
            age: self.age,
            gender: self.gender,
            remarks: self.remarks,
            created_at: self.created_at,
            deleted_at: self.deleted_at,
        }
    }
}

/// A student together with its course enrollments; the unit of consistency for writes.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentAggregate {
    pub student: Student,
    pub courses: Vec<Course>,
}

impl StudentAggregate {
    pub fn into_dto(self) -> StudentDetailDto {
        StudentDetailDto {
            student: self.student.into_dto(),
            courses: self.courses.into_iter().map(Course::into_dto).collect(),
        }
    }
}

/// Validated parameters for registering or updating a student aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationParams {
    /// Identifier embedded in the payload, if the client sent one.
    pub student_id: Option<BinaryId>,
    pub fields: StudentFields,
    pub courses: Vec<CourseParams>,
    /// Requested deletion state; only honoured by updates.
    pub deleted: bool,
    /// Append to rather than replace the existing course list.
    pub append_courses: bool,
}

/// Which students a search returns with respect to soft deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionFilter {
    #[default]
    ActiveOnly,
    IncludeDeleted,
    DeletedOnly,
}

/// Parameters for searching students.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentSearchParams {
    /// Substring filter on furigana; `None` matches everyone.
    pub furigana: Option<String>,
    pub deletion: DeletionFilter,
}

impl StudentSearchParams {
    /// Converts query parameters, giving `deletedOnly` precedence over `includeDeleted`.
    ///
    /// A blank furigana is treated as no filter.
    pub fn from_dto(dto: StudentSearchQueryDto) -> Self {
        let deletion = if dto.deleted_only {
            DeletionFilter::DeletedOnly
        } else if dto.include_deleted {
            DeletionFilter::IncludeDeleted
        } else {
            DeletionFilter::ActiveOnly
        };

        Self {
            furigana: dto
                .furigana
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
            deletion,
        }
    }
}

//! Student factory for creating test student entities.

use crate::factory::helpers::{new_binary_id, next_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .full_name("Yamada Taro")
///     .furigana("ヤマダタロウ")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: Vec<u8>,
    full_name: String,
    furigana: String,
    nickname: String,
    email: String,
    location: Option<String>,
    age: i32,
    gender: String,
    remarks: Option<String>,
    created_at: DateTime<Utc>,
    deleted: bool,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - student_id: random 16 bytes
    /// - full_name: `"Student {id}"` where id is auto-incremented
    /// - furigana: `"スチューデント{id}"`
    /// - email: `"student{id}@example.com"`
    /// - age: `20`
    /// - created_at: now
    /// - deleted: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            student_id: new_binary_id(),
            full_name: format!("Student {}", id),
            furigana: format!("スチューデント{}", id),
            nickname: format!("stu{}", id),
            email: format!("student{}@example.com", id),
            location: Some("Tokyo".to_string()),
            age: 20,
            gender: "Other".to_string(),
            remarks: None,
            created_at: Utc::now(),
            deleted: false,
        }
    }

    /// Sets the full name.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the phonetic name used by furigana search.
    pub fn furigana(mut self, furigana: impl Into<String>) -> Self {
        self.furigana = furigana.into();
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the creation timestamp, useful for ordering assertions.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the student as soft-deleted at its creation time.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            full_name: ActiveValue::Set(self.full_name),
            furigana: ActiveValue::Set(self.furigana),
            nickname: ActiveValue::Set(self.nickname),
            email: ActiveValue::Set(self.email),
            location: ActiveValue::Set(self.location),
            age: ActiveValue::Set(self.age),
            gender: ActiveValue::Set(self.gender),
            remarks: ActiveValue::Set(self.remarks),
            created_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(self.deleted.then_some(self.created_at)),
            is_deleted: ActiveValue::Set(self.deleted),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

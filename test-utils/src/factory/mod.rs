//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let student = factory::student::create_student(&db).await?;
//!     let course = factory::student_course::create_course(&db, &student.student_id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .furigana("ヤマダタロウ")
//!     .deleted(true)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod student;
pub mod student_course;

pub use student::create_student;
pub use student_course::create_course;

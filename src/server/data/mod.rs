//! Database repository layer for the student roster.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never sees storage representations. Each repository is generic over
//! `ConnectionTrait`, letting the service run several of them inside one transaction.

pub mod student;
pub mod student_course;

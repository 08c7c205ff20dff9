//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of entity-to-domain conversion and other pure logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let student = fixture::student::entity();
//! let course = fixture::student_course::entity(&student.student_id);
//! ```

pub mod student;
pub mod student_course;

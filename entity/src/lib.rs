//! SeaORM entities for the roster database.
//!
//! Identifiers are stored as 16-byte binary columns. Conversion to and from the
//! UUID strings exposed by the API happens in the server's identifier codec,
//! never here.

pub mod prelude;

pub mod student;
pub mod student_course;

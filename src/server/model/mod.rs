//! Server-side domain models and operation parameters.
//!
//! Domain models are converted from SeaORM entities at the repository boundary
//! (`from_entity`) and into wire DTOs at the controller boundary (`into_dto`).

pub mod course;
pub mod student;

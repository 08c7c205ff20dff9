//! HTTP request handlers.
//!
//! Controllers decode path identifiers, convert DTOs to parameters, call the service
//! layer and convert the resulting domain models back to DTOs.

pub mod course;
pub mod student;

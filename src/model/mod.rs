//! Wire-level DTOs shared by the HTTP API.
//!
//! These types define the JSON contract. Server-side domain models live in
//! `server::model` and convert to these at the controller boundary.

pub mod api;
pub mod student;

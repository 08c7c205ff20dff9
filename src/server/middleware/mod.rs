//! Request processing that runs before controllers see a request.
//!
//! - `auth` - Bearer-token guard for mutating endpoints
//! - `body` - JSON extractor that classifies the raw body before deserializing it

pub mod auth;
pub mod body;

//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository)
//! layer. Services are responsible for:
//!
//! - **Validation**: Checking requests before any storage access
//! - **Lifecycle**: Applying student state transitions
//! - **Transaction Management**: Keeping multi-row writes atomic

pub mod student;
pub mod validation;

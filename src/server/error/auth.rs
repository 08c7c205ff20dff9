use thiserror::Error;

use crate::server::error::kind::ErrorKind;

/// Failures raised by the access-control boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The request carried no bearer token for a protected endpoint.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authentication is required to access this resource")]
    MissingCredentials,

    /// The request carried a bearer token that does not grant access.
    ///
    /// Results in a 403 Forbidden response.
    #[error("You do not have permission to access this resource")]
    InvalidCredentials,
}

impl AuthError {
    /// Error category reported to the client.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredentials => ErrorKind::Unauthorized,
            Self::InvalidCredentials => ErrorKind::Forbidden,
        }
    }
}

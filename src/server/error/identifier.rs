use thiserror::Error;

/// Failures converting between UUID strings and 16-byte storage identifiers.
///
/// Every variant is reported to clients as `INVALID_REQUEST`; the message text
/// follows a fixed template per variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// No identifier was supplied where one is required.
    #[error("Invalid identifier format: identifier must not be null")]
    Null,

    /// The string is not a canonical hyphenated UUID.
    #[error("Invalid identifier format: '{value}' is not a valid UUID")]
    Malformed {
        /// The rejected input
        value: String,
    },

    /// A binary identifier did not have exactly 16 bytes.
    #[error("Invalid identifier format: expected 16 bytes but got {length}")]
    InvalidLength {
        /// The actual number of bytes
        length: usize,
    },
}

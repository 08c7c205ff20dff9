//! Classification of raw request bodies before deserialization.
//!
//! A deserializer that fills missing fields with defaults cannot tell a client that
//! sent `{}` apart from one that sent nothing at all. Classifying the raw bytes
//! first keeps that distinction available to the error taxonomy.

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::server::error::AppError;

/// Shape of a raw request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Zero-length or whitespace-only.
    None,
    /// Exactly `{}` once surrounding whitespace is trimmed.
    EmptyObject,
    NonEmpty,
}

impl BodyKind {
    /// Classifies raw body bytes.
    pub fn classify(raw: &[u8]) -> Self {
        match raw.trim_ascii() {
            [] => Self::None,
            b"{}" => Self::EmptyObject,
            _ => Self::NonEmpty,
        }
    }
}

/// A captured request body together with its classification.
///
/// The bytes are consumed exactly once by [`InspectedBody::deserialize`] or
/// [`InspectedBody::into_bytes`], unchanged from what the client sent.
#[derive(Debug)]
pub struct InspectedBody {
    kind: BodyKind,
    bytes: Bytes,
}

impl InspectedBody {
    pub fn new(bytes: Bytes) -> Self {
        Self {
            kind: BodyKind::classify(&bytes),
            bytes,
        }
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// Deserializes the captured JSON body.
    ///
    /// # Returns
    /// - `Ok(T)` - Successfully deserialized value
    /// - `Err(AppError::InvalidJson)` - Body is not syntactically valid JSON
    /// - `Err(AppError::TypeMismatch)` - Body is valid JSON of the wrong shape
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, AppError> {
        serde_json::from_slice(&self.bytes).map_err(|err| match err.classify() {
            Category::Data => AppError::TypeMismatch(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => {
                AppError::InvalidJson(err.to_string())
            }
        })
    }
}

//! Conversion between external UUID strings and 16-byte storage identifiers.
//!
//! The API speaks canonical lowercase hyphenated UUID strings while storage keeps
//! compact 16-byte big-endian binary keys. All conversions go through this module
//! so no call site re-implements the encoding.

use uuid::Uuid;

use crate::server::error::identifier::IdentifierError;

/// Number of bytes in a storage identifier.
pub const ID_LEN: usize = 16;

/// A storage identifier in its binary form.
pub type BinaryId = [u8; ID_LEN];

/// Encodes a binary identifier as a canonical UUID string.
///
/// Null-transparent: `None` encodes to `None`.
///
/// # Arguments
/// - `bytes` - Binary identifier, normally read from a storage row
///
/// # Returns
/// - `Ok(Some(String))` - Lowercase hyphenated UUID
/// - `Ok(None)` - Input was `None`
/// - `Err(IdentifierError::InvalidLength)` - Input was not exactly 16 bytes
pub fn encode(bytes: Option<&[u8]>) -> Result<Option<String>, IdentifierError> {
    bytes
        .map(|bytes| id_from_slice(bytes).map(|id| encode_id(&id)))
        .transpose()
}

/// Encodes an identifier already known to be 16 bytes.
pub fn encode_id(id: &BinaryId) -> String {
    Uuid::from_bytes(*id).hyphenated().to_string()
}

/// Decodes a UUID string into its 16-byte big-endian form.
///
/// The most significant 8 bytes come first, followed by the least significant 8.
///
/// # Arguments
/// - `value` - UUID string in canonical hyphenated form (hex case is ignored)
///
/// # Returns
/// - `Ok(BinaryId)` - Decoded identifier
/// - `Err(IdentifierError::Null)` - Input was `None`
/// - `Err(IdentifierError::Malformed)` - Input is not a hyphenated UUID
pub fn decode_to_bytes(value: Option<&str>) -> Result<BinaryId, IdentifierError> {
    decode_to_identifier(value).map(Uuid::into_bytes)
}

/// Decodes a UUID string into a structured 128-bit identifier.
///
/// Applies the same validation as [`decode_to_bytes`]. Braced, URN and simple
/// (unhyphenated) forms are rejected.
pub fn decode_to_identifier(value: Option<&str>) -> Result<Uuid, IdentifierError> {
    let value = value.ok_or(IdentifierError::Null)?;

    let malformed = || IdentifierError::Malformed {
        value: value.to_string(),
    };

    // 36 characters is only reachable through the hyphenated form.
    if value.len() != 36 {
        return Err(malformed());
    }

    Uuid::try_parse(value).map_err(|_| malformed())
}

/// Generates a fresh random identifier.
pub fn generate_new_identifier_bytes() -> BinaryId {
    Uuid::new_v4().into_bytes()
}

/// Checks the length of a binary identifier read from storage.
///
/// # Returns
/// - `Ok(BinaryId)` - Identifier copied into a fixed-width array
/// - `Err(IdentifierError::InvalidLength)` - Slice was not exactly 16 bytes
pub fn id_from_slice(bytes: &[u8]) -> Result<BinaryId, IdentifierError> {
    BinaryId::try_from(bytes).map_err(|_| IdentifierError::InvalidLength {
        length: bytes.len(),
    })
}

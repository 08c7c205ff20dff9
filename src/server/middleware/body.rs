use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;

use crate::server::{
    error::AppError,
    util::body::{BodyKind, InspectedBody},
};

/// JSON body extractor that rejects absent and `{}` bodies before deserialization.
///
/// Replaces `axum::Json` for request bodies so every rejection is reported in the
/// structured error shape:
/// - zero-length or whitespace-only body → `MISSING_PARAMETER`
/// - `{}` → `EMPTY_OBJECT`
/// - non-JSON `Content-Type` → `INVALID_REQUEST`
/// - malformed JSON → `INVALID_JSON`
/// - JSON of the wrong shape → `TYPE_MISMATCH`
pub struct InspectedJson<T>(pub T);

impl<S, T> FromRequest<S> for InspectedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = is_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let body = InspectedBody::new(bytes);
        match body.kind() {
            BodyKind::None => {
                return Err(AppError::MissingParameter(
                    "Request body is required".to_string(),
                ))
            }
            BodyKind::EmptyObject => return Err(AppError::EmptyObject),
            BodyKind::NonEmpty => {}
        }

        if declared_json == Some(false) {
            return Err(AppError::BadRequest(
                "Content-Type must be application/json".to_string(),
            ));
        }

        body.deserialize().map(InspectedJson)
    }
}

/// Returns `None` when no content type was declared.
fn is_json_content_type(headers: &HeaderMap) -> Option<bool> {
    let value = headers.get(header::CONTENT_TYPE)?;

    let is_json = value
        .to_str()
        .ok()
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json"
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false);

    Some(is_json)
}

use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Access level an endpoint requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Anyone may call the endpoint.
    Read,
    /// The caller must present the configured API token.
    Write,
}

impl Permission {
    /// Read-only methods are open; everything else mutates state.
    pub fn for_method(method: &Method) -> Self {
        if matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS) {
            Self::Read
        } else {
            Self::Write
        }
    }
}

/// Checks bearer credentials against the configured API token.
pub struct AuthGuard<'a> {
    api_token: Option<&'a str>,
}

impl<'a> AuthGuard<'a> {
    pub fn new(api_token: Option<&'a str>) -> Self {
        Self { api_token }
    }

    /// Verifies that `authorization` grants `permission`.
    ///
    /// Without a configured token every request is allowed.
    ///
    /// # Arguments
    /// - `permission` - Access level required by the endpoint
    /// - `authorization` - Raw `Authorization` header value, if any
    ///
    /// # Returns
    /// - `Ok(())` - Access granted
    /// - `Err(AuthError::MissingCredentials)` - No bearer token supplied
    /// - `Err(AuthError::InvalidCredentials)` - Bearer token does not match
    pub fn require(
        &self,
        permission: Permission,
        authorization: Option<&str>,
    ) -> Result<(), AuthError> {
        let Some(expected) = self.api_token else {
            return Ok(());
        };

        if permission == Permission::Read {
            return Ok(());
        }

        let Some(token) = authorization.and_then(bearer_token) else {
            return Err(AuthError::MissingCredentials);
        };

        if !bool::from(token.as_bytes().ct_eq(expected.as_bytes())) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(())
    }
}

/// Extracts the credentials of a `Bearer` authorization header.
///
/// The scheme name is matched case-insensitively.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;

    scheme
        .eq_ignore_ascii_case("bearer")
        .then_some(token.trim())
        .filter(|token| !token.is_empty())
}

/// Axum middleware enforcing [`AuthGuard`] on every routed request.
pub async fn require_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    AuthGuard::new(state.api_token.as_deref())
        .require(Permission::for_method(req.method()), authorization)?;

    Ok(next.run(req).await)
}

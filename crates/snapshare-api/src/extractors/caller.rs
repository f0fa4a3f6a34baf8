//! Identifies the calling user from the `X-User-Id` header.
//!
//! Authentication lives in front of this service; whatever verifies the
//! session forwards the user ID in this header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use snapshare_core::error::AppError;
use snapshare_core::types::id::UserId;
use snapshare_service::context::RequestContext;

use crate::error::ApiError;

/// Header carrying the calling user's ID.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The calling user's request context.
#[derive(Debug, Clone)]
pub struct Caller(pub RequestContext);

impl std::ops::Deref for Caller {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing X-User-Id header"))?;

        let user_id: UserId = raw
            .trim()
            .parse()
            .map_err(|_| AppError::authentication("Invalid X-User-Id header"))?;

        Ok(Caller(RequestContext::new(user_id)))
    }
}

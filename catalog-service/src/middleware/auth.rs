use crate::authz::Principal;
use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use service_core::error::AppError;

/// Header carrying the authenticated user id.
///
/// Authentication happens upstream: the gateway (BFF) validates the session
/// and forwards the identity in `X-User-ID`. This service only maps the
/// header to a `Principal`; a missing header means the request is anonymous
/// and will be denied by the permission layer on every protected route.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolve the request principal and stash it in the request extensions.
pub async fn principal_middleware(mut req: Request, next: Next) -> Response {
    let principal = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(Principal::user)
        .unwrap_or(Principal::Anonymous);

    req.extensions_mut().insert(principal);
    next.run(req).await
}

/// Extractor for handlers that need the authenticated user's id, e.g. to
/// record review authorship.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Principal>() {
            Some(Principal::User { id }) => Ok(CurrentUser(id.clone())),
            _ => Err(AppError::Unauthorized(anyhow::anyhow!(
                "Authentication required"
            ))),
        }
    }
}

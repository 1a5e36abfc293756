use crate::authz::{self, Action, GrantSet, Principal, Resource};
use crate::services::metrics::PERMISSION_DECISIONS_TOTAL;
use crate::startup::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use service_core::error::AppError;

/// Middleware gating a resource router on an explicit permission grant.
///
/// The action is derived from the HTTP method; the grant snapshot is loaded
/// per request and evaluated with [`authz::check`]. Every failure mode is a
/// deny: anonymous principals, unmapped methods, grant-store errors.
pub async fn require_permission(
    State(state): State<AppState>,
    resource: Resource,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let method = req.method().clone();
    let endpoint = req.uri().path().to_string();

    let principal = req
        .extensions()
        .get::<Principal>()
        .cloned()
        .unwrap_or(Principal::Anonymous);

    let Principal::User { id: user_id } = &principal else {
        tracing::warn!(
            resource = resource.as_str(),
            method = %method,
            endpoint = %endpoint,
            "Anonymous request to protected route"
        );
        return Err(AppError::Unauthorized(anyhow::anyhow!(
            "Authentication required"
        )));
    };

    let Some(action) = Action::from_method(&method) else {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Method {} is not permitted on {} resources",
            method,
            resource.as_str()
        )));
    };

    // Fail closed: a grant lookup failure evaluates as an empty snapshot.
    let grants = match state.grants.grants_for(user_id).await {
        Ok(grants) => grants,
        Err(e) => {
            tracing::warn!(
                user_id = %user_id,
                error = %e,
                "Grant lookup failed, denying request"
            );
            GrantSet::empty()
        }
    };

    if !authz::check(&principal, &grants, resource, action) {
        tracing::warn!(
            user_id = %user_id,
            resource = resource.as_str(),
            action = action.as_str(),
            endpoint = %endpoint,
            "Permission denied"
        );
        PERMISSION_DECISIONS_TOTAL
            .with_label_values(&[resource.as_str(), action.as_str(), "deny"])
            .inc();
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Missing grant for {} on {}",
            action.as_str(),
            resource.as_str()
        )));
    }

    PERMISSION_DECISIONS_TOTAL
        .with_label_values(&[resource.as_str(), action.as_str(), "allow"])
        .inc();

    Ok(next.run(req).await)
}

pub mod auth;
pub mod metrics;
pub mod permission;

pub use auth::{principal_middleware, CurrentUser, USER_ID_HEADER};
pub use metrics::http_metrics_middleware;
pub use permission::require_permission;

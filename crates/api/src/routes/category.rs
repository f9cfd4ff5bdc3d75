//! Route definitions for the read-only `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
pub fn router() -> Router<AppState> {
    Router::new().route("/categories", get(category::list))
}

//! Handlers for the read-only `/categories` resource.

use axum::extract::State;
use axum::Json;
use courseforge_db::models::category::Category;
use courseforge_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

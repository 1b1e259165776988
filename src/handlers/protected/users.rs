use axum::{extract::State, Extension, Json};

use crate::app::AppState;
use crate::database::User;
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// GET /api/users/me - The caller's own user record
pub async fn me(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Result<Json<User>, ApiError> {
    state
        .users
        .find_by_id(caller.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::unauthorized("User not found"))
}

// handlers/protected/goals.rs - /api/goals handlers
//
// Every handler runs behind the JWT middleware, so `AuthUser` is always
// present. Ownership is the only authorization rule: a goal can be changed
// or removed only by the user it was created for.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::AppState;
use crate::database::{Goal, GoalPatch, NewGoal};
use crate::error::ApiError;
use crate::middleware::AuthUser;

#[derive(Debug, Deserialize)]
pub struct CreateGoal {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedGoal {
    pub id: Uuid,
}

/// GET /api/goals - All goals owned by the caller
pub async fn list(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Result<Json<Vec<Goal>>, ApiError> {
    let goals = state.goals.find_by_owner(caller.user_id).await?;
    Ok(Json(goals))
}

/// POST /api/goals - Create a goal owned by the caller
pub async fn create(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    payload: Result<Json<CreateGoal>, JsonRejection>,
) -> Result<Json<Goal>, ApiError> {
    let Json(payload) = payload?;

    let text = payload
        .text
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::missing_field("text", "Please add a text field"))?;

    let goal = state
        .goals
        .create(NewGoal {
            text,
            owner: caller.user_id,
        })
        .await?;

    tracing::info!("Created goal {} for user {}", goal.id, caller.user_id);
    Ok(Json(goal))
}

/// PUT /api/goals/:id - Merge the payload over a goal the caller owns
pub async fn update(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<GoalPatch>, JsonRejection>,
) -> Result<Json<Goal>, ApiError> {
    let goal = owned_goal(&state, &id, &caller).await?;

    let Json(patch) = payload?;
    if matches!(patch.text.as_deref(), Some("")) {
        return Err(ApiError::missing_field("text", "Goal text cannot be empty"));
    }

    // Last write wins; the goal may also have been deleted since the lookup
    let updated = state
        .goals
        .update(goal.id, patch)
        .await?
        .ok_or_else(|| ApiError::bad_request("Goal not found"))?;

    tracing::info!("Updated goal {} for user {}", updated.id, caller.user_id);
    Ok(Json(updated))
}

/// DELETE /api/goals/:id - Remove a goal the caller owns
pub async fn delete(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<DeletedGoal>, ApiError> {
    let goal = owned_goal(&state, &id, &caller).await?;

    if !state.goals.delete(goal.id).await? {
        return Err(ApiError::bad_request("Goal not found"));
    }

    tracing::info!("Deleted goal {} for user {}", goal.id, caller.user_id);
    Ok(Json(DeletedGoal { id: goal.id }))
}

/// Resolve `id` to a goal and check the caller may mutate it.
///
/// An unparseable id is treated like a missing one. The caller's user record
/// is looked up again even though the token was already verified: a token can
/// outlive the account it was issued for.
async fn owned_goal(state: &AppState, id: &str, caller: &AuthUser) -> Result<Goal, ApiError> {
    let goal = match Uuid::parse_str(id) {
        Ok(id) => state.goals.find_by_id(id).await?,
        Err(_) => None,
    }
    .ok_or_else(|| ApiError::bad_request("Goal not found"))?;

    if state.users.find_by_id(caller.user_id).await?.is_none() {
        tracing::warn!("Token for unknown user {} used on goal {}", caller.user_id, goal.id);
        return Err(ApiError::unauthorized("User not found"));
    }

    if goal.owner != caller.user_id {
        tracing::warn!(
            "User {} attempted to modify goal {} owned by {}",
            caller.user_id,
            goal.id,
            goal.owner
        );
        return Err(ApiError::unauthorized("User not authorized"));
    }

    Ok(goal)
}

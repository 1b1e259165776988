use async_trait::async_trait;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::goal::{Goal, GoalPatch, NewGoal};
use crate::database::models::user::{NewUser, User};

/// Persistence for goal documents. Each call is a single-record operation;
/// driver failures are returned unchanged.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// All goals owned by `owner`, oldest first.
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Goal>, DatabaseError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Goal>, DatabaseError>;

    async fn create(&self, goal: NewGoal) -> Result<Goal, DatabaseError>;

    /// Merge `patch` over the stored goal. `None` if it no longer exists.
    async fn update(&self, id: Uuid, patch: GoalPatch) -> Result<Option<Goal>, DatabaseError>;

    /// Returns whether a goal was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DatabaseError>;

    async fn create(&self, user: NewUser) -> Result<User, DatabaseError>;
}

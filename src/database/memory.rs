use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::goal::{Goal, GoalPatch, NewGoal};
use crate::database::models::user::{NewUser, User};
use crate::database::store::{GoalStore, UserStore};

/// Process-local store for development and tests. Records are kept in
/// insertion order so listings come back oldest first.
#[derive(Default)]
pub struct MemoryStore {
    goals: RwLock<Vec<Goal>>,
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GoalStore for MemoryStore {
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Goal>, DatabaseError> {
        let goals = self.goals.read().await;
        Ok(goals.iter().filter(|g| g.owner == owner).cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Goal>, DatabaseError> {
        let goals = self.goals.read().await;
        Ok(goals.iter().find(|g| g.id == id).cloned())
    }

    async fn create(&self, goal: NewGoal) -> Result<Goal, DatabaseError> {
        let now = Utc::now();
        let created = Goal {
            id: Uuid::new_v4(),
            text: goal.text,
            owner: goal.owner,
            created_at: now,
            updated_at: now,
        };
        self.goals.write().await.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, patch: GoalPatch) -> Result<Option<Goal>, DatabaseError> {
        let mut goals = self.goals.write().await;
        let Some(goal) = goals.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };
        patch.apply(goal);
        goal.updated_at = Utc::now();
        Ok(Some(goal.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let mut goals = self.goals.write().await;
        let before = goals.len();
        goals.retain(|g| g.id != id);
        Ok(goals.len() != before)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DatabaseError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DatabaseError> {
        let created = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            created_at: Utc::now(),
        };
        self.users.write().await.push(created.clone());
        Ok(created)
    }
}

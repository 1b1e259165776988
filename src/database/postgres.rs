use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{Database, DatabaseError};
use crate::database::models::goal::{Goal, GoalPatch, NewGoal};
use crate::database::models::user::{NewUser, User};
use crate::database::store::{GoalStore, UserStore};

const GOAL_COLUMNS: &str = "id, text, owner, created_at, updated_at";
const USER_COLUMNS: &str = "id, name, email, created_at";

pub struct PgGoalStore {
    database: Database,
}

impl PgGoalStore {
    pub fn new(database: &Database) -> Self {
        Self {
            database: database.clone(),
        }
    }
}

#[async_trait]
impl GoalStore for PgGoalStore {
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Goal>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM goals WHERE owner = $1 ORDER BY created_at, id",
            GOAL_COLUMNS
        );
        let goals = sqlx::query_as::<_, Goal>(&sql)
            .bind(owner)
            .fetch_all(self.database.pool())
            .await?;
        Ok(goals)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Goal>, DatabaseError> {
        let sql = format!("SELECT {} FROM goals WHERE id = $1", GOAL_COLUMNS);
        let goal = sqlx::query_as::<_, Goal>(&sql)
            .bind(id)
            .fetch_optional(self.database.pool())
            .await?;
        Ok(goal)
    }

    async fn create(&self, goal: NewGoal) -> Result<Goal, DatabaseError> {
        let sql = format!(
            "INSERT INTO goals (id, text, owner) VALUES ($1, $2, $3) RETURNING {}",
            GOAL_COLUMNS
        );
        let created = sqlx::query_as::<_, Goal>(&sql)
            .bind(Uuid::new_v4())
            .bind(&goal.text)
            .bind(goal.owner)
            .fetch_one(self.database.pool())
            .await?;
        Ok(created)
    }

    async fn update(&self, id: Uuid, patch: GoalPatch) -> Result<Option<Goal>, DatabaseError> {
        let sql = format!(
            "UPDATE goals SET text = COALESCE($2, text), updated_at = NOW() WHERE id = $1 RETURNING {}",
            GOAL_COLUMNS
        );
        let updated = sqlx::query_as::<_, Goal>(&sql)
            .bind(id)
            .bind(patch.text)
            .fetch_optional(self.database.pool())
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(self.database.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        self.database.health_check().await
    }
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(database: &Database) -> Self {
        Self {
            pool: database.pool().clone(),
        }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DatabaseError> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create(&self, user: NewUser) -> Result<User, DatabaseError> {
        let sql = format!(
            "INSERT INTO users (id, name, email) VALUES ($1, $2, $3) RETURNING {}",
            USER_COLUMNS
        );
        let created = sqlx::query_as::<_, User>(&sql)
            .bind(Uuid::new_v4())
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }
}

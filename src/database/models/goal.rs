use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Goal {
    pub id: Uuid,
    pub text: String,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a goal that does not exist yet. The store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub text: String,
    pub owner: Uuid,
}

/// Partial update merged over an existing goal. `None` keeps the stored value.
///
/// `id`, `owner` and the timestamps are not part of the patch, so a payload
/// carrying them deserializes with those keys ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GoalPatch {
    #[serde(default)]
    pub text: Option<String>,
}

impl GoalPatch {
    pub fn apply(&self, goal: &mut Goal) {
        if let Some(text) = &self.text {
            goal.text = text.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_ignores_owner_and_unknown_fields() {
        let patch: GoalPatch = serde_json::from_value(json!({
            "owner": Uuid::new_v4(),
            "color": "red"
        }))
        .unwrap();
        assert_eq!(patch, GoalPatch::default());
    }

    #[test]
    fn apply_keeps_unspecified_fields() {
        let now = Utc::now();
        let owner = Uuid::new_v4();
        let mut goal = Goal {
            id: Uuid::new_v4(),
            text: "Learn Go".to_string(),
            owner,
            created_at: now,
            updated_at: now,
        };

        GoalPatch::default().apply(&mut goal);
        assert_eq!(goal.text, "Learn Go");

        GoalPatch { text: Some("Learn Rust".to_string()) }.apply(&mut goal);
        assert_eq!(goal.text, "Learn Rust");
        assert_eq!(goal.owner, owner);
    }
}

//! Runs the Postgres-backed stores against a live database.
//!
//! Every test returns early when `DATABASE_URL` is unset.

use anyhow::Result;
use uuid::Uuid;

use goal_api_rust::config::AppConfig;
use goal_api_rust::database::{
    Database, GoalPatch, GoalStore, NewGoal, NewUser, PgGoalStore, PgUserStore, User, UserStore,
};

async fn connect() -> Result<Option<Database>> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping postgres store test");
        return Ok(None);
    };

    let mut config = AppConfig::development().database;
    config.url = Some(url);
    config.max_connections = 2;

    let database = Database::connect(&config).await?;
    database.migrate().await?;
    Ok(Some(database))
}

async fn create_user(database: &Database, name: &str) -> Result<User> {
    let users = PgUserStore::new(database);
    let user = users
        .create(NewUser {
            name: name.to_string(),
            email: format!("{}-{}@example.com", name, Uuid::new_v4()),
        })
        .await?;
    Ok(user)
}

#[tokio::test]
async fn lists_goals_in_creation_order_per_owner() -> Result<()> {
    let Some(database) = connect().await? else {
        return Ok(());
    };
    let goals = PgGoalStore::new(&database);
    let alice = create_user(&database, "alice").await?;
    let bob = create_user(&database, "bob").await?;

    for text in ["first", "second", "third"] {
        goals
            .create(NewGoal {
                text: text.to_string(),
                owner: alice.id,
            })
            .await?;
    }
    goals
        .create(NewGoal {
            text: "bob's".to_string(),
            owner: bob.id,
        })
        .await?;

    let listed = goals.find_by_owner(alice.id).await?;
    let texts: Vec<&str> = listed.iter().map(|g| g.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "third"]);
    assert!(listed.iter().all(|g| g.owner == alice.id));

    assert_eq!(goals.find_by_owner(bob.id).await?.len(), 1);
    assert!(goals.find_by_owner(Uuid::new_v4()).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn update_merges_patch_over_stored_goal() -> Result<()> {
    let Some(database) = connect().await? else {
        return Ok(());
    };
    let goals = PgGoalStore::new(&database);
    let owner = create_user(&database, "merge").await?;
    let goal = goals
        .create(NewGoal {
            text: "Learn Go".to_string(),
            owner: owner.id,
        })
        .await?;

    // An empty patch keeps the text and only bumps updated_at
    let kept = goals
        .update(goal.id, GoalPatch::default())
        .await?
        .expect("goal exists");
    assert_eq!(kept.text, "Learn Go");
    assert_eq!(kept.owner, owner.id);
    assert_eq!(kept.created_at, goal.created_at);
    assert!(kept.updated_at >= goal.updated_at);

    let changed = goals
        .update(
            goal.id,
            GoalPatch {
                text: Some("Learn Rust".to_string()),
            },
        )
        .await?
        .expect("goal exists");
    assert_eq!(changed.text, "Learn Rust");
    assert_eq!(changed.id, goal.id);

    let stored = goals.find_by_id(goal.id).await?.expect("goal exists");
    assert_eq!(stored.text, "Learn Rust");

    let missing = goals
        .update(
            Uuid::new_v4(),
            GoalPatch {
                text: Some("nobody".to_string()),
            },
        )
        .await?;
    assert!(missing.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() -> Result<()> {
    let Some(database) = connect().await? else {
        return Ok(());
    };
    let goals = PgGoalStore::new(&database);
    let owner = create_user(&database, "delete").await?;
    let goal = goals
        .create(NewGoal {
            text: "short lived".to_string(),
            owner: owner.id,
        })
        .await?;

    assert!(goals.delete(goal.id).await?);
    assert!(!goals.delete(goal.id).await?);
    assert!(goals.find_by_id(goal.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn health_check_round_trips_through_pool() -> Result<()> {
    let Some(database) = connect().await? else {
        return Ok(());
    };
    let goals = PgGoalStore::new(&database);
    goals.health_check().await?;

    database.close().await;
    assert!(goals.health_check().await.is_err());
    Ok(())
}

#[tokio::test]
async fn finds_users_by_id() -> Result<()> {
    let Some(database) = connect().await? else {
        return Ok(());
    };
    let user = create_user(&database, "lookup").await?;
    let users = PgUserStore::new(&database);

    let found = users.find_by_id(user.id).await?.expect("user exists");
    assert_eq!(found.email, user.email);
    assert!(users.find_by_id(Uuid::new_v4()).await?.is_none());
    Ok(())
}

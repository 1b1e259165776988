mod common;

use anyhow::Result;
use reqwest::StatusCode;
use uuid::Uuid;

use goal_api_rust::auth::generate_jwt;

#[tokio::test]
async fn goals_require_bearer_token() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/api/goals")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Not authorized, no token");
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn invalid_token_is_rejected_before_handlers() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/api/goals"))
        .bearer_auth("not.a.jwt")
        .json(&serde_json::json!({ "text": "sneaky" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Nothing was created for anybody
    let (_, token) = server.create_user("alice").await?;
    assert!(server.list_goals(&token).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn me_returns_caller() -> Result<()> {
    let server = common::spawn_server().await?;
    let (user, token) = server.create_user("alice").await?;

    let res = server
        .client
        .get(server.url("/api/users/me"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["email"], "alice@example.com");
    Ok(())
}

#[tokio::test]
async fn me_with_token_for_unknown_user_is_unauthorized() -> Result<()> {
    let server = common::spawn_server().await?;
    let token = generate_jwt(&server.config.security, Uuid::new_v4())?;

    let res = server
        .client
        .get(server.url("/api/users/me"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

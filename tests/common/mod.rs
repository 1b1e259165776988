#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;
use tokio::net::TcpListener;

use goal_api_rust::app::{build_router, AppState};
use goal_api_rust::auth::generate_jwt;
use goal_api_rust::config::AppConfig;
use goal_api_rust::database::{MemoryStore, NewUser, User, UserStore};

pub struct TestServer {
    pub base_url: String,
    pub config: AppConfig,
    pub store: Arc<MemoryStore>,
    pub client: reqwest::Client,
}

/// Serve the real router over a fresh memory store on an ephemeral port.
/// The server lives on the calling test's runtime.
pub async fn spawn_server() -> Result<TestServer> {
    let mut config = AppConfig::in_memory();
    config.api.enable_request_logging = false;

    let (state, store) = AppState::in_memory(config.clone());
    let app = build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("test server error: {}", e);
        }
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        config,
        store,
        client: reqwest::Client::new(),
    })
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Provision a user directly in the store and mint a token for it.
    pub async fn create_user(&self, name: &str) -> Result<(User, String)> {
        let user = UserStore::create(
            self.store.as_ref(),
            NewUser {
                name: name.to_string(),
                email: format!("{}@example.com", name),
            },
        )
        .await?;
        let token = generate_jwt(&self.config.security, user.id)?;
        Ok((user, token))
    }

    pub async fn list_goals(&self, token: &str) -> Result<Vec<Value>> {
        let res = self
            .client
            .get(self.url("/api/goals"))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json::<Vec<Value>>().await?)
    }
}

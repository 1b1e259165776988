use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{get, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, SecurityConfig, StorageBackend};
use crate::database::{Database, DatabaseError, GoalStore, MemoryStore, PgGoalStore, PgUserStore, UserStore};
use crate::handlers::protected::{goals, users};
use crate::handlers::public;
use crate::middleware::jwt_auth_middleware;

/// Shared handler state. Stores are injected here rather than reached
/// through globals.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub goals: Arc<dyn GoalStore>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(config: AppConfig, goals: Arc<dyn GoalStore>, users: Arc<dyn UserStore>) -> Self {
        Self {
            config: Arc::new(config),
            goals,
            users,
        }
    }

    /// State over a fresh memory store. Returns the store so callers can seed it.
    pub fn in_memory(config: AppConfig) -> (Self, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let state = Self::new(config, store.clone(), store.clone());
        (state, store)
    }

    /// Build the configured storage backend.
    pub async fn from_config(config: AppConfig) -> Result<Self, DatabaseError> {
        match config.database.backend {
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                Ok(Self::in_memory(config).0)
            }
            StorageBackend::Postgres => {
                let database = Database::connect(&config.database).await?;
                if config.database.run_migrations {
                    database.migrate().await?;
                }
                let goals = Arc::new(PgGoalStore::new(&database));
                let users = Arc::new(PgUserStore::new(&database));
                Ok(Self::new(config, goals, users))
            }
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    // Protected API: every route below requires a bearer token
    let protected = Router::new()
        .route("/api/goals", get(goals::list).post(goals::create))
        .route("/api/goals/:id", put(goals::update).delete(goals::delete))
        .route("/api/users/me", get(users::me))
        .route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth_middleware));

    let router = Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .merge(protected)
        .fallback(public::not_found)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer(&config.security))
        .with_state(state);

    if config.api.enable_request_logging {
        router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    } else {
        router
    }
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }
    if security.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

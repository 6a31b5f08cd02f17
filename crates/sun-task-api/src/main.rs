//! Weekly Mission Submission API Server

mod auth;
mod db;
mod error;
mod routes;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: AppConfig,
}

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,
    pub admin_username: String,
    pub admin_password: String,
    pub max_body_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/sun_task".to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "development-secret-change-in-production".to_string()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "chitu".to_string()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "1234567890".to_string()),
            max_body_size: 64 * 1024 * 1024, // submissions carry data-URI photo batches
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "sun_task_api=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting weekly mission API server");

    let config = AppConfig::default();

    // Connect to database
    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Failed to run migrations");

    info!("Database migrations complete");

    // Create shared state
    let state = Arc::new(AppState { db, config });

    // Mutating mission routes and review surfaces require an admin token.
    let admin_routes = Router::new()
        .route("/api/missions", post(routes::missions::create_mission))
        .route("/api/missions/:id", put(routes::missions::update_mission))
        .route("/api/missions/:id", delete(routes::missions::delete_mission))
        .route("/api/auth/me", get(routes::auth::me))
        .route("/api/admin/stats", get(routes::admin::get_stats))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ));

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(routes::health_check))
        // Authentication
        .route("/api/auth/login", post(routes::auth::login))
        // Current week period
        .route("/api/period", get(routes::get_period))
        // Missions
        .route("/api/missions", get(routes::missions::list_missions))
        // Submissions
        .route("/api/submissions", get(routes::submissions::list_submissions))
        .route("/api/submissions", post(routes::submissions::create_submission))
        .merge(admin_routes)
        // Request body limit
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Tracing
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state.clone());

    // Start server
    let addr = state.config.bind_addr.clone();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}

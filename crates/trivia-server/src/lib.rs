//! trivia-server - REST API server for the trivia API.
//!
//! This crate provides the HTTP facade over `trivia-core`: routing,
//! request/response shaping, error mapping, CORS, and request logging.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use trivia_core::SqliteStore;
//! use trivia_server::{create_server, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(SqliteStore::open("trivia.db").unwrap());
//!     let app = create_server(AppState::new(store));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}

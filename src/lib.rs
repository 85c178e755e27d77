pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Configuration;
pub use error::ServerError;

use axum::{routing::get, Router};
use services::GoogleOAuthClient;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub oauth_client: Arc<GoogleOAuthClient>,
}

/// Build the application router. Shared between the binary and tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/login/google", get(handlers::login_google))
        .route("/auth/callback", get(handlers::auth_callback))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

mod callback;
mod login;

pub use callback::auth_callback;
pub use login::login_google;

use crate::models::HealthResponse;
use axum::Json;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        ping: "pong".to_string(),
    })
}

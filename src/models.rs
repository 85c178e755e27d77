use serde::{Deserialize, Serialize};
use serde_json::Value;

// GET /
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ping: String,
}

// GET /login/google
#[derive(Debug, Serialize)]
pub struct LoginUrlResponse {
    pub url: String,
}

// GET /auth/callback
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
}

/// Callback result. Both shapes are returned with a 200 status; a failed
/// token exchange carries the provider's raw response in `details`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CallbackResponse {
    User { user: Value },
    ExchangeFailed { error: String, details: Value },
}

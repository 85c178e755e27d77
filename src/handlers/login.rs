use axum::{extract::State, Json};

use crate::models::LoginUrlResponse;
use crate::AppState;

/// Return the Google authorization URL for the client to redirect to.
pub async fn login_google(State(state): State<AppState>) -> Json<LoginUrlResponse> {
    let url = state.oauth_client.build_authorization_url();

    tracing::debug!("Built authorization URL");

    Json(LoginUrlResponse { url })
}

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use crate::error::ServerError;
use crate::models::{CallbackParams, CallbackResponse};
use crate::AppState;

/// Handle the provider redirect: exchange the authorization code for an
/// access token, then fetch the user's profile with it.
pub async fn auth_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Json<CallbackResponse>, ServerError> {
    let span = tracing::info_span!("auth_callback");
    let _enter = span.enter();

    let code = params
        .code
        .ok_or_else(|| ServerError::BadRequest("Missing authorization code".to_string()))?;

    let token_data = state.oauth_client.exchange_code(&code).await?;

    // A response without an access token is the provider rejecting the code.
    // The raw body goes back to the client unmodified.
    let Some(access_token) = token_data.get("access_token").and_then(Value::as_str) else {
        tracing::warn!("Token exchange failed");
        return Ok(Json(CallbackResponse::ExchangeFailed {
            error: "Token exchange failed".to_string(),
            details: token_data,
        }));
    };

    let user = state.oauth_client.fetch_user_info(access_token).await?;

    tracing::info!("User profile fetched");

    Ok(Json(CallbackResponse::User { user }))
}

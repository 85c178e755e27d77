use serde_json::Value;

use crate::config::OAuthConfiguration;
use crate::error::ServerError;

const SCOPE: &str = "openid%20profile%20email";

pub struct GoogleOAuthClient {
    http: reqwest::Client,
    config: OAuthConfiguration,
}

impl GoogleOAuthClient {
    pub fn new(config: OAuthConfiguration) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Build the authorization URL users are redirected to for consent.
    pub fn build_authorization_url(&self) -> String {
        format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope={}&access_type=offline",
            self.config.auth_url,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.redirect_uri),
            SCOPE,
        )
    }

    /// Exchange an authorization code for the provider's token response.
    ///
    /// Returns the raw JSON mapping untyped: a rejected code produces a
    /// body without `access_token`, and the caller surfaces that body
    /// verbatim to the client.
    pub async fn exchange_code(&self, code: &str) -> Result<Value, ServerError> {
        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let token_data = self
            .http
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?
            .json()
            .await?;

        tracing::debug!("Token endpoint responded");

        Ok(token_data)
    }

    /// Fetch the user's profile with a bearer access token, returned verbatim.
    pub async fn fetch_user_info(&self, access_token: &str) -> Result<Value, ServerError> {
        let user = self
            .http
            .get(&self.config.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .json()
            .await?;

        Ok(user)
    }
}

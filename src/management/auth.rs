use reqwest::Client;
use tracing::debug;

use crate::{error::ApiError, spotify::auth::request_client_token, types::Token};

/// Holds the client credentials and the bearer token derived from them.
pub struct TokenManager {
    client_id: String,
    client_secret: String,
    token_url: String,
    token: Option<Token>,
    refreshes: u32,
}

impl TokenManager {
    pub fn new(client_id: String, client_secret: String, token_url: String) -> Self {
        TokenManager {
            client_id,
            client_secret,
            token_url,
            token: None,
            refreshes: 0,
        }
    }

    /// Runs the initial client-credentials exchange.
    pub async fn obtain(&mut self, http: &Client) -> Result<&Token, ApiError> {
        let token =
            request_client_token(http, &self.token_url, &self.client_id, &self.client_secret)
                .await?;
        Ok(self.token.insert(token))
    }

    /// Re-runs the exchange and replaces the current token in place.
    ///
    /// On failure the previous token is kept untouched.
    pub async fn refresh(&mut self, http: &Client) -> Result<(), ApiError> {
        debug!(refreshes = self.refreshes, "refreshing client token");
        let token =
            request_client_token(http, &self.token_url, &self.client_id, &self.client_secret)
                .await?;
        self.token = Some(token);
        self.refreshes += 1;
        Ok(())
    }

    /// `Authorization` header value for the current token.
    pub fn auth_header(&self) -> Option<String> {
        self.token
            .as_ref()
            .map(|t| format!("Bearer {}", t.access_token))
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn refresh_count(&self) -> u32 {
        self.refreshes
    }
}

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::Value;
use tracing::debug;

use crate::{error::ApiError, types::Token};

/// Exchanges a client id and secret for a bearer token.
///
/// Implements the OAuth 2.0 client-credentials flow: the credentials are sent
/// Basic-auth encoded to the token endpoint together with
/// `grant_type=client_credentials`. No user is involved and no refresh token
/// is issued, so "refreshing" means running this exchange again.
///
/// # Arguments
///
/// * `http` - HTTP client used for the exchange
/// * `token_url` - Token endpoint, e.g. `https://accounts.spotify.com/api/token`
/// * `client_id` - Application client id
/// * `client_secret` - Application client secret
///
/// # Returns
///
/// - `Ok(Token)` - Bearer token with its lifetime and the time it was obtained
/// - `Err(ApiError::Auth)` - Endpoint rejected the credentials, could not be
///   reached or answered without an `access_token`
///
/// # Retry Logic
///
/// None. Failures are returned to the caller, which is the request executor
/// during a 401 retry.
pub async fn request_client_token(
    http: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<Token, ApiError> {
    let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));

    let response = http
        .post(token_url)
        .header(AUTHORIZATION, format!("Basic {}", credentials))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| ApiError::Auth {
            status: e.status(),
            message: e.to_string(),
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| ApiError::Auth {
        status: Some(status),
        message: e.to_string(),
    })?;
    let json: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

    if !status.is_success() {
        let message = json["error_description"]
            .as_str()
            .or_else(|| json["error"].as_str())
            .unwrap_or("token endpoint rejected the credentials")
            .to_string();
        return Err(ApiError::Auth {
            status: Some(status),
            message,
        });
    }

    let Some(access_token) = json["access_token"].as_str() else {
        return Err(ApiError::Auth {
            status: Some(status),
            message: "response did not contain an access token".to_string(),
        });
    };

    debug!(expires_in = json["expires_in"].as_u64(), "obtained client token");

    Ok(Token {
        access_token: access_token.to_string(),
        token_type: json["token_type"]
            .as_str()
            .unwrap_or("Bearer")
            .to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::{
    config::Settings,
    error::{ApiError, FALLBACK_ERROR_MESSAGE},
    management::TokenManager,
    types::{ErrorResponse, Token},
};

/// Delay applied to the first rate-limit event of a session.
pub const INITIAL_BACKOFF: Duration = Duration::from_millis(200);

/// Successful outcome of a remote call.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub data: T,
}

/// Payload XOR error of one remote call; both sides may carry the HTTP status.
pub type ApiResult<T = Value> = Result<ApiResponse<T>, ApiError>;

/// How the session reacts to `429 Too Many Requests`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackoffPolicy {
    /// Delay used for the first rate-limit event; later events double it.
    pub initial_delay: Duration,
    /// Doubling past this delay gives up with [`ApiError::RateLimitExceeded`].
    pub max_delay: Duration,
    /// Clear the delay after any successful response.
    pub reset_on_success: bool,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            initial_delay: INITIAL_BACKOFF,
            max_delay: Duration::from_secs(60),
            reset_on_success: false,
        }
    }
}

/// Authenticated connection to the Spotify Web API for a single run.
///
/// The session owns the token and the rate-limit backoff state and mutates
/// both while executing requests. It is meant to be used by one sequential
/// fetch at a time through `&mut`.
pub struct ClientSession {
    http: Client,
    base_url: String,
    tokens: TokenManager,
    backoff: BackoffPolicy,
    backoff_delay: Duration,
}

impl ClientSession {
    /// Builds the HTTP client and performs the initial token exchange.
    pub async fn connect(settings: &Settings) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()?;

        let mut tokens = TokenManager::new(
            settings.client_id.clone(),
            settings.client_secret.clone(),
            settings.token_url.clone(),
        );
        tokens.obtain(&http).await?;

        Ok(Self {
            http,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            tokens,
            backoff: settings.backoff,
            backoff_delay: Duration::ZERO,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Delay every request currently waits before being sent.
    pub fn backoff_delay(&self) -> Duration {
        self.backoff_delay
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.current_token()
    }

    pub fn token_refreshes(&self) -> u32 {
        self.tokens.refresh_count()
    }

    /// Refreshes the session's token with a new client-credentials exchange.
    pub async fn refresh_token(&mut self) -> Result<(), ApiError> {
        self.tokens.refresh(&self.http).await
    }

    /// Executes a single authenticated GET and parses the body as JSON.
    ///
    /// Expired tokens (401) are refreshed and rate limits (429) are backed off,
    /// each followed by exactly one retry. Other error statuses are returned
    /// without retrying.
    pub async fn execute(&mut self, url: &str) -> ApiResult<Value> {
        if !self.backoff_delay.is_zero() {
            sleep(self.backoff_delay).await;
        }

        let response = self.send(url).await?;
        let result = match response.status().as_u16() {
            200..=299 => decode(response).await,
            401 => {
                debug!(url, "token rejected, refreshing before retry");
                self.refresh_token().await?;
                let retry = self.send(url).await?;
                finish(retry).await
            }
            429 => {
                let delay = self.escalate_backoff()?;
                warn!(url, ?delay, "rate limited, backing off before retry");
                sleep(delay).await;
                let retry = self.send(url).await?;
                if retry.status() == StatusCode::TOO_MANY_REQUESTS {
                    Err(ApiError::RateLimitExceeded { delay })
                } else {
                    finish(retry).await
                }
            }
            _ => Err(http_error(response).await),
        };

        if result.is_ok() && self.backoff.reset_on_success {
            self.backoff_delay = Duration::ZERO;
        }

        result
    }

    /// Executes a GET and deserializes the JSON payload into `T`.
    pub async fn fetch<T: DeserializeOwned>(&mut self, url: &str) -> ApiResult<T> {
        let response = self.execute(url).await?;
        let status = response.status;
        let data = serde_json::from_value(response.data).map_err(|e| ApiError::Decode {
            status: Some(status),
            message: e.to_string(),
        })?;
        Ok(ApiResponse { status, data })
    }

    async fn send(&self, url: &str) -> Result<Response, ApiError> {
        let mut request = self.http.get(url);
        if let Some(header) = self.tokens.auth_header() {
            request = request.header(AUTHORIZATION, header);
        }
        Ok(request.send().await?)
    }

    fn escalate_backoff(&mut self) -> Result<Duration, ApiError> {
        let next = if self.backoff_delay.is_zero() {
            self.backoff.initial_delay
        } else {
            self.backoff_delay * 2
        };

        if next > self.backoff.max_delay {
            return Err(ApiError::RateLimitExceeded { delay: next });
        }

        self.backoff_delay = next;
        Ok(next)
    }
}

async fn finish(response: Response) -> ApiResult<Value> {
    if response.status().is_success() {
        decode(response).await
    } else {
        Err(http_error(response).await)
    }
}

async fn decode(response: Response) -> ApiResult<Value> {
    let status = response.status();
    let body = response.bytes().await?;
    let data = serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
        status: Some(status),
        message: e.to_string(),
    })?;
    Ok(ApiResponse { status, data })
}

async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body
            .error
            .message
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        Err(_) => FALLBACK_ERROR_MESSAGE.to_string(),
    };
    ApiError::Http { status, message }
}

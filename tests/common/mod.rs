#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use spex::{config::Settings, spotify::BackoffPolicy};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
// base64("test-client:test-secret")
pub const BASIC_AUTH: &str = "Basic dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ=";

pub const TEST_BACKOFF: Duration = Duration::from_millis(10);

// Settings pointing both endpoints at the mock server, with a short backoff
pub fn settings(server: &MockServer) -> Settings {
    Settings {
        client_id: CLIENT_ID.to_string(),
        client_secret: CLIENT_SECRET.to_string(),
        api_url: format!("{}/v1", server.uri()),
        token_url: format!("{}/api/token", server.uri()),
        request_timeout: Duration::from_secs(5),
        backoff: BackoffPolicy {
            initial_delay: TEST_BACKOFF,
            max_delay: Duration::from_secs(5),
            reset_on_success: false,
        },
    }
}

pub fn token_body(access_token: &str) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": 3600
    })
}

pub fn token_mock(access_token: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", BASIC_AUTH))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(access_token)))
}

// Mounts a token endpoint that always hands out `access_token`
pub async fn mount_token(server: &MockServer, access_token: &str) {
    token_mock(access_token).mount(server).await;
}

pub fn bearer(access_token: &str) -> String {
    format!("Bearer {}", access_token)
}

pub fn spotify_error(status: u16, message: &str) -> Value {
    json!({ "error": { "status": status, "message": message } })
}

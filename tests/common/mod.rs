//! Shared fixtures for the OAuth flow tests: a mock TikTok token endpoint and
//! an app wired against it.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use axum_extra::extract::cookie::Cookie;
use fashion_scout_server::{
    app,
    models::{AppConfig, AppState},
};
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const BASE_URL: &str = "http://localhost:3000";
pub const TOKEN_PATH: &str = "/oauth/access_token/";
pub const TEST_STATE: &str = "test_state";
pub const VALID_CODE: &str = "valid_code";
pub const MOCK_ACCESS_TOKEN: &str = "mock_access_token";

pub fn test_config(token_url: String) -> AppConfig {
    let mut config = AppConfig::new(
        "test_client_key".to_string(),
        SecretString::from("test_client_secret".to_string()),
        format!("{}/api/auth/callback", BASE_URL),
    );
    config.base_url = BASE_URL.to_string();
    config.token_url = token_url;
    config
}

pub fn test_app(server: &MockServer) -> Router {
    test_app_with(server, |_| {})
}

/// Same as [`test_app`] but lets the caller adjust the config first.
pub fn test_app_with(server: &MockServer, adjust: impl FnOnce(&mut AppConfig)) -> Router {
    let mut config = test_config(format!("{}{}", server.uri(), TOKEN_PATH));
    adjust(&mut config);
    app(AppState::new(config).unwrap())
}

/// Token endpoint that accepts `valid_code` and rejects everything else,
/// the way TikTok answers an unknown or reused code.
pub async fn setup_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("code=valid_code"))
        .and(body_string_contains("client_key=test_client_key"))
        .and(body_string_contains("client_secret=test_client_secret"))
        .and(body_string_contains("grant_type=authorization_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": MOCK_ACCESS_TOKEN,
            "expires_in": 3600,
            "refresh_token": "mock_refresh_token",
            "refresh_expires_in": 86400,
            "open_id": "mock_open_id",
            "scope": "user.info.basic,video.list,comment.create"
        })))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "Invalid code" })))
        .mount(server)
        .await;
}

pub fn callback_request(query: &str, state_cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(format!("/api/auth/callback{}", query));
    if let Some(value) = state_cookie {
        builder = builder.header(header::COOKIE, format!("oauth_state={}", value));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn location<B>(response: &Response<B>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect without Location header")
        .to_str()
        .unwrap()
}

pub fn set_cookies<B>(response: &Response<B>) -> Vec<Cookie<'static>> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| Cookie::parse(value.to_str().unwrap().to_string()).unwrap())
        .collect()
}

pub fn find_cookie<'a>(cookies: &'a [Cookie<'static>], name: &str) -> Option<&'a Cookie<'static>> {
    cookies.iter().find(|cookie| cookie.name() == name)
}

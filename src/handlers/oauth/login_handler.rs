use crate::error::AuthorizeUrlError;
use crate::handlers::oauth::auth_cookie;
use crate::models::AppState;
use crate::models::oauth::{STATE_COOKIE, STATE_COOKIE_MAX_AGE_SECS};
use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use oauth2::CsrfToken;
use url::Url;

const STATE_TOKEN_BYTES: u32 = 32;

pub async fn login_handler(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthorizeUrlError> {
    let csrf_token = CsrfToken::new_random_len(STATE_TOKEN_BYTES);
    let authorize_url = build_authorize_url(&app_state, csrf_token.secret())
        .inspect_err(|e| tracing::error!(auth_url = %app_state.config.auth_url, "{}", e))?;

    let state_cookie = auth_cookie(
        STATE_COOKIE,
        csrf_token.secret().to_string(),
        STATE_COOKIE_MAX_AGE_SECS,
        app_state.config.environment.secure_cookies(),
    );

    tracing::info!("starting OAuth flow, redirecting to provider");
    Ok((jar.add(state_cookie), Redirect::temporary(authorize_url.as_str())))
}

pub fn build_authorize_url(app_state: &AppState, state: &str) -> Result<Url, AuthorizeUrlError> {
    let config = &app_state.config;
    let mut url = Url::parse(&config.auth_url)?;

    url.query_pairs_mut()
        .append_pair("client_key", &config.client_key)
        .append_pair("scope", &config.scopes.join(","))
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", &config.redirect_url)
        .append_pair("state", state);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppConfig;
    use secrecy::SecretString;

    fn test_state() -> AppState {
        let config = AppConfig::new(
            "test_client_key".to_string(),
            SecretString::from("test_secret".to_string()),
            "http://localhost:3000/api/auth/callback".to_string(),
        );
        AppState::new(config).unwrap()
    }

    #[test]
    fn authorize_url_carries_every_oauth_parameter() {
        let url = build_authorize_url(&test_state(), "mock_state").unwrap();

        assert!(url.as_str().starts_with("https://www.tiktok.com/auth/authorize/"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("client_key"), Some("test_client_key"));
        assert_eq!(
            get("scope"),
            Some("user.info.basic,video.list,comment.create")
        );
        assert_eq!(get("response_type"), Some("code"));
        assert_eq!(
            get("redirect_uri"),
            Some("http://localhost:3000/api/auth/callback")
        );
        assert_eq!(get("state"), Some("mock_state"));
        assert!(!url.as_str().contains("test_secret"));
    }

    #[test]
    fn malformed_auth_endpoint_is_reported() {
        let mut state = test_state();
        state.config.auth_url = "not a url".to_string();
        assert!(build_authorize_url(&state, "mock_state").is_err());
    }
}

use crate::error::TokenExchangeError;
use crate::models::AppState;
use crate::models::oauth::TokenResponse;
use secrecy::ExposeSecret;

/// Trades an authorization code for an access token at the provider's token
/// endpoint. Single attempt; the caller decides what a failure means.
pub async fn exchange_code_for_token(
    app_state: &AppState,
    code: &str,
) -> Result<TokenResponse, TokenExchangeError> {
    let config = &app_state.config;

    let params = [
        ("client_key", config.client_key.as_str()),
        ("client_secret", config.client_secret.expose_secret()),
        ("code", code),
        ("grant_type", "authorization_code"),
        ("redirect_uri", config.redirect_url.as_str()),
    ];

    let response = app_state
        .http_client
        .post(&config.token_url)
        .form(&params)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error body".to_string());
        return Err(TokenExchangeError::Status { status, body });
    }

    let body = response.text().await?;
    let token = serde_json::from_str::<TokenResponse>(&body)?;

    tracing::debug!(
        expires_in = token.expires_in,
        open_id = token.open_id.as_deref().unwrap_or_default(),
        scope = token.scope.as_deref().unwrap_or_default(),
        has_refresh_token = token.refresh_token.is_some(),
        "token exchange succeeded"
    );

    Ok(token)
}

use crate::error::{AuthError, AuthRedirect};
use crate::handlers::oauth::{auth_cookie, token_exchange::exchange_code_for_token};
use crate::models::AppState;
use crate::models::oauth::{CallbackParams, STATE_COOKIE, TOKEN_COOKIE};
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

pub async fn callback_handler(
    query: Result<Query<CallbackParams>, QueryRejection>,
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthRedirect> {
    let config = &app_state.config;
    let fail = |error: AuthError| {
        tracing::warn!(error = %error, reason = error.code(), "OAuth callback rejected");
        AuthRedirect {
            error,
            error_page: config.absolute_url("/auth-error"),
        }
    };

    // A query that cannot be parsed (e.g. a repeated `state`) cannot prove
    // it carries the state we issued.
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unparseable callback query");
            return Err(fail(AuthError::InvalidState));
        }
    };

    let stored_state = jar.get(STATE_COOKIE).map(|cookie| cookie.value());
    match (params.state.as_deref(), stored_state) {
        (Some(state), Some(stored)) if !state.is_empty() && state == stored => {}
        _ => return Err(fail(AuthError::InvalidState)),
    }

    let code = match params.code.as_deref() {
        Some(code) if !code.is_empty() => code,
        _ => return Err(fail(AuthError::NoCode)),
    };

    let token = exchange_code_for_token(&app_state, code)
        .await
        .map_err(|e| fail(AuthError::from(e)))?;

    let token_cookie = auth_cookie(
        TOKEN_COOKIE,
        token.access_token,
        token.expires_in,
        config.environment.secure_cookies(),
    );
    let jar = jar
        .add(token_cookie)
        .remove(Cookie::build((STATE_COOKIE, "")).path("/"));

    tracing::info!("OAuth login completed, redirecting to dashboard");
    Ok((jar, Redirect::temporary(&config.absolute_url("/dashboard"))))
}

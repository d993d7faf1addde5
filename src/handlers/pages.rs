use crate::models::AppState;
use crate::models::oauth::TOKEN_COOKIE;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

pub async fn home_handler() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>TikTok Fashion Scout</title></head>
<body>
    <main>
        <h1>TikTok Fashion Scout</h1>
        <p>Discover and share fashion trends on TikTok</p>
        <a href="/api/auth">Login with TikTok</a>
    </main>
</body>
</html>"#,
    )
}

/// Only checks that a token cookie exists; the token itself is not verified.
pub async fn dashboard_handler(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let has_token = jar
        .get(TOKEN_COOKIE)
        .is_some_and(|cookie| !cookie.value().is_empty());

    if !has_token {
        tracing::debug!("no access token cookie, sending visitor back to login");
        return Redirect::temporary(&app_state.config.absolute_url("/")).into_response();
    }

    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>Your Fashion Scout Dashboard</title></head>
<body>
    <main>
        <h1>Your Fashion Scout Dashboard</h1>
        <section>
            <h2>Recent Activity</h2>
            <p>Your recent fashion discoveries will appear here.</p>
        </section>
    </main>
</body>
</html>"#,
    )
    .into_response()
}

#[derive(Debug, Deserialize)]
pub struct AuthErrorQuery {
    pub error: Option<String>,
}

pub async fn auth_error_handler(Query(query): Query<AuthErrorQuery>) -> impl IntoResponse {
    let message = match query.error.as_deref() {
        Some("invalid_state") => "Your login session expired or could not be verified.",
        Some("no_code") => "TikTok did not return an authorization code.",
        Some("token_exchange") => "We could not complete the login with TikTok.",
        _ => "Something went wrong while logging in.",
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Login failed</title></head>
<body>
    <h1>Error</h1>
    <p>{message} Please try logging in again.</p>
    <p><a href="/api/auth">Back to Login</a></p>
</body>
</html>"#
    ))
}

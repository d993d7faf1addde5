use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use thiserror::Error;

/// Reasons the token endpoint call can fail. All of them end the login
/// attempt the same way; the variants only exist for logging.
#[derive(Debug, Error)]
pub enum TokenExchangeError {
    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("token endpoint returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed token response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Terminal failures of a login attempt. Each one sends the browser to the
/// error page; the user has to start over from `/api/auth`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("state parameter missing or does not match the stored state")]
    InvalidState,
    #[error("provider did not return an authorization code")]
    NoCode,
    #[error(transparent)]
    TokenExchange(#[from] TokenExchangeError),
}

impl AuthError {
    /// Value of the `error` query parameter on the error page.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidState => "invalid_state",
            AuthError::NoCode => "no_code",
            AuthError::TokenExchange(_) => "token_exchange",
        }
    }

    pub fn redirect_to(&self, error_page: &str) -> Redirect {
        Redirect::temporary(&format!("{}?error={}", error_page, self.code()))
    }
}

/// An [`AuthError`] bound to the absolute URL of the error page, so it can be
/// returned straight from a handler.
#[derive(Debug)]
pub struct AuthRedirect {
    pub error: AuthError,
    pub error_page: String,
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        self.error.redirect_to(&self.error_page).into_response()
    }
}

/// Failure to even start the flow, typically a misconfigured endpoint URL.
#[derive(Debug, Error)]
#[error("could not build authorization URL: {0}")]
pub struct AuthorizeUrlError(#[from] pub url::ParseError);

impl IntoResponse for AuthorizeUrlError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Error</h1><p>Login is currently unavailable.</p>".to_string()),
        )
            .into_response()
    }
}

use serde::Deserialize;

pub const STATE_COOKIE: &str = "oauth_state";
pub const TOKEN_COOKIE: &str = "tiktok_token";
pub const STATE_COOKIE_MAX_AGE_SECS: i64 = 3600;

/// Query string TikTok appends when it sends the user back to us. Either
/// value may be absent when the user denied consent or the link was forged.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// Body returned by the token endpoint on a successful code exchange.
#[derive(Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub refresh_expires_in: Option<i64>,
    #[serde(default)]
    pub open_id: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[redacted]")
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[redacted]"))
            .field("refresh_expires_in", &self.refresh_expires_in)
            .field("open_id", &self.open_id)
            .field("scope", &self.scope)
            .finish()
    }
}

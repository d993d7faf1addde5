use std::{env, str::FromStr, time::Duration};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_AUTH_URL: &str = "https://www.tiktok.com/auth/authorize/";
const DEFAULT_TOKEN_URL: &str = "https://open-api.tiktok.com/oauth/access_token/";
const DEFAULT_SCOPES: &str = "user.info.basic,video.list,comment.create";
const TOKEN_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable `{0}` is not set")]
    MissingVar(&'static str),
    #[error("invalid value for environment variable `{0}`")]
    InvalidVar(&'static str),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Deployment flavour. Only decides whether cookies carry the `Secure` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn secure_cookies(self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" | "test" => Ok(Environment::Development),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client_key: String,
    pub client_secret: SecretString,
    pub redirect_url: String,
    pub base_url: String,
    pub environment: Environment,
    pub listen_addr: String,
    pub auth_url: String,
    pub token_url: String,
    pub scopes: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = VarSource(lookup);

        let client_key = vars.required("TIKTOK_CLIENT_KEY")?;
        let client_secret = SecretString::from(vars.required("TIKTOK_CLIENT_SECRET")?);
        let redirect_url = vars.required("TIKTOK_REDIRECT_URI")?;

        let base_url = vars.optional("APP_BASE_URL", DEFAULT_BASE_URL);
        let environment = match vars.get("APP_ENV") {
            Some(value) => value
                .parse::<Environment>()
                .map_err(|_| ConfigError::InvalidVar("APP_ENV"))?,
            None => Environment::default(),
        };
        let listen_addr = vars.optional("LISTEN_ADDR", DEFAULT_LISTEN_ADDR);
        let auth_url = vars.optional("TIKTOK_AUTH_URL", DEFAULT_AUTH_URL);
        let token_url = vars.optional("TIKTOK_TOKEN_URL", DEFAULT_TOKEN_URL);
        let scopes = parse_scopes(&vars.optional("TIKTOK_SCOPES", DEFAULT_SCOPES));

        Ok(Self {
            client_key,
            client_secret,
            redirect_url,
            base_url,
            environment,
            listen_addr,
            auth_url,
            token_url,
            scopes,
        })
    }

    /// Config pointing at TikTok's public endpoints, for callers that wire
    /// credentials in directly rather than through the environment.
    pub fn new(client_key: String, client_secret: SecretString, redirect_url: String) -> Self {
        Self {
            client_key,
            client_secret,
            redirect_url,
            base_url: DEFAULT_BASE_URL.to_string(),
            environment: Environment::default(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            scopes: parse_scopes(DEFAULT_SCOPES),
        }
    }

    /// Absolute URL for a path on this server.
    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

struct VarSource<F>(F);

impl<F> VarSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Blank values count as unset.
    fn get(&self, name: &str) -> Option<String> {
        (self.0)(name).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, name: &'static str) -> Result<String, ConfigError> {
        self.get(name).ok_or(ConfigError::MissingVar(name))
    }

    fn optional(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }
}

fn parse_scopes(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|value| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then_some(trimmed.to_string())
        })
        .collect()
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let http_client = reqwest::Client::builder()
            .timeout(TOKEN_REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

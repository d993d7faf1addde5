pub mod error;
pub mod handlers;
pub mod models;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use handlers::{auth_error_handler, callback_handler, dashboard_handler, home_handler, login_handler};
use models::AppState;

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/auth", get(login_handler))
        .route("/api/auth/callback", get(callback_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/auth-error", get(auth_error_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fashion_scout_server=debug")),
        )
        .init();
}

pub mod callback_handler;
pub mod login_handler;
pub mod token_exchange;

pub use callback_handler::callback_handler;
pub use login_handler::login_handler;

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// HTTP-only, `SameSite=Lax` cookie scoped to the whole site.
pub(crate) fn auth_cookie(
    name: &'static str,
    value: String,
    max_age_secs: i64,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

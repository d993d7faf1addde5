pub mod oauth;
pub mod pages;

pub use oauth::{callback_handler, login_handler};
pub use pages::{auth_error_handler, dashboard_handler, home_handler};

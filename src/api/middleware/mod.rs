mod auth;
mod logging;

pub use auth::{access_password_auth, ACCESS_PASSWORD_HEADER};
pub use logging::request_logger;

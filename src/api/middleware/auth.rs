use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::api::state::AppState;

pub const ACCESS_PASSWORD_HEADER: &str = "x-access-password";

/// Plaintext access gate: the request header must equal the configured
/// password exactly. Anything else is 401.
pub async fn access_password_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let supplied = request
        .headers()
        .get(ACCESS_PASSWORD_HEADER)
        .and_then(|v| v.to_str().ok());

    match supplied {
        Some(password) if password == state.config.config.auth.password => {
            Ok(next.run(request).await)
        }
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

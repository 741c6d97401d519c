//! Stub for the form submission target.

use axum::Form;
use serde_json::json;

use crate::domain::Credentials;
use crate::error::AppError;
use crate::web::LOGIN_ENDPOINT;

/// Receives the login form.
///
/// # Endpoint
///
/// `POST /login.php`
///
/// # Behavior
///
/// Authentication is not implemented: there is no user store, no password
/// hashing and no session. The handler only repeats the browser-side
/// emptiness check for requests that bypassed it.
///
/// # Errors
///
/// - **400 Bad Request**: a field is empty; the message matches the browser alert
/// - **501 Not Implemented**: both fields are present
pub async fn login_submit_handler(Form(credentials): Form<Credentials>) -> AppError {
    if let Err(empty) = credentials.check() {
        tracing::info!(fields = ?empty.fields(), "Login rejected: empty field");
        return AppError::bad_request(empty.to_string(), json!({ "fields": empty.fields() }));
    }

    tracing::warn!("Login submitted but authentication is not implemented");
    AppError::not_implemented(
        "Authentication is not implemented",
        json!({ "endpoint": LOGIN_ENDPOINT }),
    )
}

//! Login page route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_page_handler, login_submit_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Public login routes.
///
/// # Endpoints
///
/// - `GET /` - Login page
/// - `POST /login.php` - Form submission target (stub)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(login_page_handler))
        .route("/login.php", post(login_submit_handler))
}

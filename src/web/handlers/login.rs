//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::domain::EmptyField;
use crate::web::LOGIN_ENDPOINT;

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Username/password form posting to [`LOGIN_ENDPOINT`]
/// - Browser-side emptiness check using the [`EmptyField`] messages
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub title: &'static str,
    pub stylesheet: &'static str,
    pub action: &'static str,
    pub both_empty: String,
    pub username_empty: String,
    pub password_empty: String,
}

impl Default for LoginTemplate {
    fn default() -> Self {
        Self {
            title: "Login",
            stylesheet: "/static/style.css",
            action: LOGIN_ENDPOINT,
            both_empty: EmptyField::Both.to_string(),
            username_empty: EmptyField::Username.to_string(),
            password_empty: EmptyField::Password.to_string(),
        }
    }
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /`
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate::default()
}

//! Web layer for the browser-facing login page.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Page rendering and the submission stub
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod routes;

/// Form `action`, relative to the page at `/`.
pub const LOGIN_ENDPOINT: &str = "login.php";

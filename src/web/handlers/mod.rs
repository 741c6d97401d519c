//! Handlers for the login page and its submission target.

mod login;
mod submit;

pub use login::{LoginTemplate, login_page_handler};
pub use submit::login_submit_handler;

//! Domain layer: the login form input, the rule deciding whether it may be
//! submitted, and the database handle contract.
//!
//! The submission rule runs twice: in the browser (rendered into the login
//! page script) and in the `login.php` stub for requests that skipped the
//! browser.

pub mod credentials;
pub mod database;

pub use credentials::{Credentials, EmptyField};
pub use database::DatabaseHandle;

#[cfg(test)]
pub use database::MockDatabaseHandle;

//! Seam between the web layer and the open database connection.

use crate::error::AppError;
use async_trait::async_trait;

/// An open, usable connection to the database server.
///
/// Nothing in the login flow queries the database; the only consumer is the
/// health probe.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MySqlDatabase`] - MySQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseHandle: Send + Sync {
    /// Round-trips to the server to confirm the connection is alive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the server does not answer.
    async fn ping(&self) -> Result<(), AppError>;

    /// Connection target without credentials, for display.
    fn target(&self) -> String;
}

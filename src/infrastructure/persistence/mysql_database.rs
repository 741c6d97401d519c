//! MySQL connection bootstrap.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use serde_json::json;
use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::config::DatabaseConfig;
use crate::domain::DatabaseHandle;
use crate::error::AppError;

/// Failure to open the database connection. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("Connection failed: {0}")]
    Driver(#[from] sqlx::Error),

    #[error("Connection failed: no answer from {target} within {seconds}s")]
    TimedOut { target: String, seconds: u64 },
}

/// Maps the configuration onto driver connect options.
pub fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.username)
        .password(&config.password)
        .database(&config.schema_name)
        .charset(&config.charset)
}

/// The single database connection held by the service.
///
/// There is no pool and no reconnect: if the connection drops, the health
/// probe reports it and a restart is required.
pub struct MySqlDatabase {
    conn: Mutex<MySqlConnection>,
    target: String,
    /// Deadline for a ping, lock wait included. Same as the connect timeout.
    ping_timeout: Duration,
}

impl MySqlDatabase {
    /// Opens the connection described by `config`.
    ///
    /// No query is issued. Callers must not continue serving on error.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] if the server is unreachable, rejects the
    /// credentials or the schema, or does not answer within
    /// `config.connect_timeout` seconds.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, ConnectionError> {
        let target = config.display_target();
        let options = connect_options(config);

        let conn = tokio::time::timeout(
            Duration::from_secs(config.connect_timeout),
            options.connect(),
        )
        .await
        .map_err(|_| ConnectionError::TimedOut {
            target: target.clone(),
            seconds: config.connect_timeout,
        })??;

        Ok(Self {
            conn: Mutex::new(conn),
            target,
            ping_timeout: Duration::from_secs(config.connect_timeout),
        })
    }
}

/// Runs a database round-trip, giving up after `limit`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the driver fails or the deadline passes.
async fn within<T, F>(limit: Duration, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => Ok(result?),
        Err(_) => {
            tracing::warn!(timeout_ms = limit.as_millis() as u64, "Database did not answer");
            Err(AppError::internal(
                "Database did not answer in time",
                json!({ "timeout_ms": limit.as_millis() as u64 }),
            ))
        }
    }
}

#[async_trait]
impl DatabaseHandle for MySqlDatabase {
    async fn ping(&self) -> Result<(), AppError> {
        within(self.ping_timeout, async {
            let mut conn = self.conn.lock().await;
            conn.ping().await
        })
        .await
    }

    fn target(&self) -> String {
        self.target.clone()
    }
}

//! Database implementations of domain contracts.
//!
//! - [`MySqlDatabase`] - the single MySQL connection behind [`crate::domain::DatabaseHandle`]

pub mod mysql_database;

pub use mysql_database::{ConnectionError, MySqlDatabase, connect_options};

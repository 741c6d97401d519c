//! # Login Page
//!
//! A minimal username/password login page built with Axum and MySQL.
//!
//! The service opens one database connection at startup and serves an HTML
//! form whose script blocks submission while either field is empty. The form
//! target, `login.php`, is a stub: authentication is not implemented.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Form input, the emptiness rule, the database handle trait
//! - **Infrastructure Layer** ([`infrastructure`]) - MySQL connection bootstrap
//! - **API Layer** ([`api`]) - Health endpoint and request tracing
//! - **Web Layer** ([`web`]) - Login page and submission stub
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_USER="root"
//! export DB_NAME="database1"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

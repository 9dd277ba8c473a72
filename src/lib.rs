//! Employee Portal - session-authenticated employee records.
//!
//! Server-rendered pages and a JSON API over one employee store, with
//! username/password accounts and server-side sessions.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Credential, session and employee use cases
//! - **infra**: Database, repositories and session stores
//! - **api**: HTTP handlers, session gate, pages and routes
//! - **types**: Shared response bodies
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Credential, Employee, Password};
pub use errors::{AppError, AppResult};

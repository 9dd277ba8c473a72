//! API layer - HTTP handlers and middleware
//!
//! This module contains all HTTP-related concerns:
//! - HTML pages and JSON API handlers
//! - Session gate middleware
//! - Custom extractors
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod views;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::{AppState, HttpSettings};

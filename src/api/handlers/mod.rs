//! HTTP request handlers.

pub mod auth_handler;
pub mod employee_api_handler;
pub mod employee_handler;

pub use auth_handler::{auth_routes, session_routes};
pub use employee_api_handler::employee_api_routes;
pub use employee_handler::employee_page_routes;

//! API middleware.

mod auth;

pub use auth::{api_session_gate, session_gate, session_token, CurrentUser};

//! Shared response bodies.

mod response;

pub use response::{EmployeeEnvelope, MessageResponse};

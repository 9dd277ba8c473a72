use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Employee;

/// Message-only response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Employee deleted")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A message together with the record it concerns
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeEnvelope {
    #[schema(example = "Employee created")]
    pub message: String,
    pub employee: Employee,
}

impl EmployeeEnvelope {
    pub fn new(message: impl Into<String>, employee: Employee) -> Self {
        Self {
            message: message.into(),
            employee,
        }
    }
}

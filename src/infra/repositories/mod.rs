//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod credential_repository;
mod employee_repository;
pub(crate) mod entities;

pub use credential_repository::{CredentialRepository, CredentialStore};
pub use employee_repository::{EmployeeRepository, EmployeeStore};

// Export mocks for tests (both unit and downstream)
#[cfg(any(test, feature = "test-utils"))]
pub use credential_repository::MockCredentialRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;

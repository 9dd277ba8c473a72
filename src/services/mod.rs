//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure. They reach
//! storage through [`crate::infra::UnitOfWork`] so tests can swap the
//! repositories underneath.

pub mod container;
mod credential_service;
mod employee_service;
mod session_service;

pub use container::{ServiceContainer, Services};

pub use credential_service::{CredentialManager, CredentialService};
pub use employee_service::{EmployeeManager, EmployeeService};
pub use session_service::{Authenticator, SessionAuthority};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use credential_service::MockCredentialService;
#[cfg(any(test, feature = "test-utils"))]
pub use employee_service::MockEmployeeService;
#[cfg(any(test, feature = "test-utils"))]
pub use session_service::MockSessionAuthority;

//! Unit of Work - single access point for all repositories.
//!
//! Services depend on [`UnitOfWork`] rather than on concrete stores, so a
//! test can hand them in-memory or mocked repositories through
//! [`Persistence::from_parts`].

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{CredentialRepository, CredentialStore, EmployeeRepository, EmployeeStore};

/// Unit of Work trait for dependency injection.
///
/// Each request-response cycle is its own unit; there are no
/// cross-request transactions.
pub trait UnitOfWork: Send + Sync {
    /// Get credential repository
    fn credentials(&self) -> Arc<dyn CredentialRepository>;

    /// Get employee repository
    fn employees(&self) -> Arc<dyn EmployeeRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    credential_repo: Arc<dyn CredentialRepository>,
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl Persistence {
    /// Create repositories backed by a database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            credential_repo: Arc::new(CredentialStore::new(db.clone())),
            employee_repo: Arc::new(EmployeeStore::new(db)),
        }
    }

    /// Assemble from already-built repositories
    pub fn from_parts(
        credential_repo: Arc<dyn CredentialRepository>,
        employee_repo: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            credential_repo,
            employee_repo,
        }
    }
}

impl UnitOfWork for Persistence {
    fn credentials(&self) -> Arc<dyn CredentialRepository> {
        self.credential_repo.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }
}

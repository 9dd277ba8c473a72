//! Service container - one place to reach every application service.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{
    Authenticator, CredentialManager, CredentialService, EmployeeManager, EmployeeService,
    SessionAuthority,
};
use crate::infra::{Persistence, SessionStore, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn credentials(&self) -> Arc<dyn CredentialService>;

    fn sessions(&self) -> Arc<dyn SessionAuthority>;

    fn employees(&self) -> Arc<dyn EmployeeService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    credential_service: Arc<dyn CredentialService>,
    session_authority: Arc<dyn SessionAuthority>,
    employee_service: Arc<dyn EmployeeService>,
}

impl Services {
    pub fn new(
        credential_service: Arc<dyn CredentialService>,
        session_authority: Arc<dyn SessionAuthority>,
        employee_service: Arc<dyn EmployeeService>,
    ) -> Self {
        Self {
            credential_service,
            session_authority,
            employee_service,
        }
    }

    /// Wire every service over a shared unit of work.
    pub fn from_unit_of_work<U: UnitOfWork + 'static>(
        uow: Arc<U>,
        session_store: Arc<dyn SessionStore>,
        idle_seconds: u64,
    ) -> Self {
        Self {
            credential_service: Arc::new(CredentialManager::new(uow.clone())),
            session_authority: Arc::new(Authenticator::new(uow.clone(), session_store, idle_seconds)),
            employee_service: Arc::new(EmployeeManager::new(uow)),
        }
    }

    /// Create service container from database connection and session backend
    pub fn from_connection(
        db: DatabaseConnection,
        session_store: Arc<dyn SessionStore>,
        idle_seconds: u64,
    ) -> Self {
        Self::from_unit_of_work(Arc::new(Persistence::new(db)), session_store, idle_seconds)
    }
}

impl ServiceContainer for Services {
    fn credentials(&self) -> Arc<dyn CredentialService> {
        self.credential_service.clone()
    }

    fn sessions(&self) -> Arc<dyn SessionAuthority> {
        self.session_authority.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }
}

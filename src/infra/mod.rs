//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection, migrations and repositories
//! - Redis cache
//! - Session storage backends
//! - Unit of Work for repository access

pub mod cache;
pub mod db;
pub mod repositories;
pub mod sessions;
pub mod unit_of_work;

pub use cache::Cache;
pub use db::{Database, Migrator};
pub use repositories::{CredentialRepository, CredentialStore, EmployeeRepository, EmployeeStore};
pub use sessions::{MemorySessionStore, SessionStore};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCredentialRepository, MockEmployeeRepository};
#[cfg(any(test, feature = "test-utils"))]
pub use sessions::MockSessionStore;

//! Application state - Dependency injection container.
//!
//! Handlers reach every service and backing store through [`AppState`].

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, SessionStore};
use crate::services::{
    CredentialService, EmployeeService, ServiceContainer, Services, SessionAuthority,
};

/// HTTP behaviour switches taken from [`Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSettings {
    /// Mark the session cookie `Secure`
    pub cookie_secure: bool,
    /// Put the JSON API behind the session gate
    pub api_require_session: bool,
}

impl From<&Config> for HttpSettings {
    fn from(config: &Config) -> Self {
        Self {
            cookie_secure: config.cookie_secure,
            api_require_session: config.api_require_session,
        }
    }
}

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub credential_service: Arc<dyn CredentialService>,
    pub session_authority: Arc<dyn SessionAuthority>,
    pub employee_service: Arc<dyn EmployeeService>,
    /// Session backend, kept for health checks
    pub session_store: Arc<dyn SessionStore>,
    /// Absent when the services run over non-database repositories
    pub database: Option<Arc<Database>>,
    pub settings: HttpSettings,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(
        database: Arc<Database>,
        session_store: Arc<dyn SessionStore>,
        config: &Config,
    ) -> Self {
        let services = Services::from_connection(
            database.get_connection(),
            session_store.clone(),
            config.session_idle_seconds,
        );

        let mut state = Self::new(&services, session_store, HttpSettings::from(config));
        state.database = Some(database);
        state
    }

    /// Create application state from an already-wired service container.
    pub fn new(
        services: &dyn ServiceContainer,
        session_store: Arc<dyn SessionStore>,
        settings: HttpSettings,
    ) -> Self {
        Self {
            credential_service: services.credentials(),
            session_authority: services.sessions(),
            employee_service: services.employees(),
            session_store,
            database: None,
            settings,
        }
    }
}

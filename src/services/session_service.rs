//! Session authority - login, logout and session validation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Session, SessionIdentity};
use crate::errors::{AppError, AppResult};
use crate::infra::{SessionStore, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Session authority trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionAuthority: Send + Sync {
    /// Check the password and open a session for the user.
    ///
    /// Fails with [`AppError::NotFound`] for an unknown username and
    /// [`AppError::InvalidCredentials`] for a wrong password.
    async fn login(&self, username: String, password: String) -> AppResult<Session>;

    /// Destroy a session; unknown tokens are ignored
    async fn logout(&self, token: &str) -> AppResult<()>;

    /// Resolve a token to its identity, extending the idle expiry
    async fn validate(&self, token: &str) -> AppResult<Option<SessionIdentity>>;
}

/// Concrete implementation of SessionAuthority.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    sessions: Arc<dyn SessionStore>,
    idle_seconds: u64,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, sessions: Arc<dyn SessionStore>, idle_seconds: u64) -> Self {
        Self {
            uow,
            sessions,
            idle_seconds,
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> SessionAuthority for Authenticator<U> {
    async fn login(&self, username: String, password: String) -> AppResult<Session> {
        let Some(credential) = self.uow.credentials().find_by_username(&username).await? else {
            tracing::warn!(username = %username, "Login failed: unknown user");
            return Err(AppError::NotFound);
        };

        if !credential.verify_password(&password) {
            tracing::warn!(username = %username, "Login failed: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let session = Session::issue(SessionIdentity::from(&credential));
        self.sessions
            .insert(&session.token, &session.identity, self.idle_seconds)
            .await?;

        tracing::info!(user_id = %credential.id, username = %credential.username, "User logged in");
        Ok(session)
    }

    async fn logout(&self, token: &str) -> AppResult<()> {
        self.sessions.remove(token).await
    }

    async fn validate(&self, token: &str) -> AppResult<Option<SessionIdentity>> {
        self.sessions.touch(token, self.idle_seconds).await
    }
}

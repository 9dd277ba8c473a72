//! Credential service - user registration and lookup.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Credential, Password};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Credential service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Hash the password and persist a new credential.
    ///
    /// Fails with [`AppError::Conflict`] when the username is taken.
    async fn register(&self, username: String, password: String) -> AppResult<Credential>;

    /// Look up a credential by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Credential>>;
}

/// Concrete implementation of CredentialService using Unit of Work.
pub struct CredentialManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CredentialManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CredentialService for CredentialManager<U> {
    async fn register(&self, username: String, password: String) -> AppResult<Credential> {
        if self.uow.credentials().find_by_username(&username).await?.is_some() {
            tracing::warn!(username = %username, "Registration rejected: username taken");
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let credential = self.uow.credentials().create(username, password_hash).await?;

        tracing::info!(user_id = %credential.id, username = %credential.username, "User registered");
        Ok(credential)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Credential>> {
        self.uow.credentials().find_by_username(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockCredentialRepository, MockEmployeeRepository, Persistence};
    use uuid::Uuid;

    fn manager(repo: MockCredentialRepository) -> CredentialManager<Persistence> {
        let uow = Persistence::from_parts(Arc::new(repo), Arc::new(MockEmployeeRepository::new()));
        CredentialManager::new(Arc::new(uow))
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plain_text() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|username, hash| {
                username == "ann"
                    && hash != "pa55word"
                    && Password::from_hash(hash.clone()).verify("pa55word")
            })
            .times(1)
            .returning(|username, hash| Ok(Credential::new(Uuid::new_v4(), username, hash)));

        let credential = manager(repo)
            .register("ann".to_string(), "pa55word".to_string())
            .await
            .unwrap();

        assert_eq!(credential.username, "ann");
        assert!(credential.verify_password("pa55word"));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_find_by_username().returning(|username| {
            Ok(Some(Credential::new(
                Uuid::new_v4(),
                username.to_string(),
                "existing-hash".to_string(),
            )))
        });
        repo.expect_create().never();

        let result = manager(repo)
            .register("ann".to_string(), "other".to_string())
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}

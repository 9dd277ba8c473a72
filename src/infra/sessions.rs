//! Session storage backends.
//!
//! A session store maps an opaque token to a [`SessionIdentity`] with a
//! sliding idle expiry: every successful [`SessionStore::touch`] restarts
//! the countdown.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};

use super::Cache;
use crate::config::CACHE_HEALTH_KEY;
use crate::domain::SessionIdentity;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Session store trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Bind `identity` to `token` for `ttl_seconds` of inactivity
    async fn insert(&self, token: &str, identity: &SessionIdentity, ttl_seconds: u64)
        -> AppResult<()>;

    /// Return the identity for a live session and extend its expiry
    async fn touch(&self, token: &str, ttl_seconds: u64) -> AppResult<Option<SessionIdentity>>;

    /// Forget a session; absent tokens are ignored
    async fn remove(&self, token: &str) -> AppResult<()>;

    /// Check backend connectivity
    async fn ping(&self) -> AppResult<()>;
}

#[async_trait]
impl SessionStore for Cache {
    async fn insert(
        &self,
        token: &str,
        identity: &SessionIdentity,
        ttl_seconds: u64,
    ) -> AppResult<()> {
        self.set_session(token, identity, ttl_seconds).await
    }

    async fn touch(&self, token: &str, ttl_seconds: u64) -> AppResult<Option<SessionIdentity>> {
        self.touch_session(token, ttl_seconds).await
    }

    async fn remove(&self, token: &str) -> AppResult<()> {
        self.delete_session(token).await
    }

    async fn ping(&self) -> AppResult<()> {
        self.exists(CACHE_HEALTH_KEY).await.map(|_| ())
    }
}

struct Entry {
    identity: SessionIdentity,
    expires_at: Instant,
}

/// In-process session store for single-node deployments and tests.
///
/// Uses the tokio clock, so expiry follows `tokio::time::pause`/`advance`.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions; expired entries are dropped first.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(
        &self,
        token: &str,
        identity: &SessionIdentity,
        ttl_seconds: u64,
    ) -> AppResult<()> {
        let now = Instant::now();
        let entry = Entry {
            identity: identity.clone(),
            expires_at: now + Duration::from_secs(ttl_seconds),
        };

        // Sessions nobody revisits would otherwise never leave the map
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(token.to_string(), entry);
        Ok(())
    }

    async fn touch(&self, token: &str, ttl_seconds: u64) -> AppResult<Option<SessionIdentity>> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        match entries.get_mut(token) {
            Some(entry) if entry.expires_at > now => {
                entry.expires_at = now + Duration::from_secs(ttl_seconds);
                Ok(Some(entry.identity.clone()))
            }
            Some(_) => {
                entries.remove(token);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, token: &str) -> AppResult<()> {
        self.entries.write().await.remove(token);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

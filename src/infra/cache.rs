//! Redis cache implementation.
//!
//! Provides a type-safe JSON layer over a pooled Redis connection. The
//! session store builds on the session operations at the bottom.

use redis::{aio::ConnectionManager, AsyncCommands, Client, Cmd, RedisError};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::{Config, CACHE_PREFIX_SESSION};
use crate::errors::{AppError, AppResult};

/// Redis cache wrapper with connection pooling.
#[derive(Clone)]
pub struct Cache {
    connection: ConnectionManager,
}

impl Cache {
    /// Connect to the Redis instance named in the configuration.
    pub async fn connect(config: &Config) -> Result<Self, RedisError> {
        let client = Client::open(config.redis_url.as_str())?;
        let connection = ConnectionManager::new(client).await?;

        tracing::info!("Redis cache connected");

        Ok(Self { connection })
    }

    // =========================================================================
    // Generic Cache Operations
    // =========================================================================

    /// Set a value in cache with a TTL (in seconds).
    pub async fn set_with_ttl<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_seconds: u64,
    ) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::internal(format!("Cache serialization error: {}", e)))?;

        conn.set_ex::<_, _, ()>(key, json, ttl_seconds).await?;

        Ok(())
    }

    /// Delete a value from cache.
    pub async fn delete(&self, key: &str) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.del(key).await?;
        Ok(())
    }

    /// Check if a key exists in cache.
    pub async fn exists(&self, key: &str) -> AppResult<bool> {
        let mut conn = self.connection.clone();
        let exists: bool = conn.exists(key).await?;
        Ok(exists)
    }

    // =========================================================================
    // Session Cache Operations
    // =========================================================================

    /// Store session data.
    pub async fn set_session<T: Serialize>(
        &self,
        session_id: &str,
        data: &T,
        ttl_seconds: u64,
    ) -> AppResult<()> {
        self.set_with_ttl(&session_key(session_id), data, ttl_seconds)
            .await
    }

    /// Get session data and push its expiry `ttl_seconds` into the future.
    ///
    /// Read and refresh happen in one `GETEX`, so a session cannot lapse
    /// between them.
    pub async fn touch_session<T: DeserializeOwned>(
        &self,
        session_id: &str,
        ttl_seconds: u64,
    ) -> AppResult<Option<T>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = getex_command(&session_key(session_id), ttl_seconds)
            .query_async(&mut conn)
            .await?;

        value.map(|json| decode(&json)).transpose()
    }

    /// Delete session.
    pub async fn delete_session(&self, session_id: &str) -> AppResult<()> {
        self.delete(&session_key(session_id)).await
    }
}

fn session_key(session_id: &str) -> String {
    format!("{}{}", CACHE_PREFIX_SESSION, session_id)
}

fn decode<T: DeserializeOwned>(json: &str) -> AppResult<T> {
    serde_json::from_str(json)
        .map_err(|e| AppError::internal(format!("Cache deserialization error: {}", e)))
}

/// `GETEX key EX ttl`: read a value and reset its TTL atomically.
fn getex_command(key: &str, ttl_seconds: u64) -> Cmd {
    let mut command = redis::cmd("GETEX");
    command.arg(key).arg("EX").arg(ttl_seconds);
    command
}

//! Redis cache backend.

use appfinder_error::{CacheError, CacheErrorKind, CacheResult};
use appfinder_interface::CacheBackend;
use async_trait::async_trait;
use redis::IntoConnectionInfo;
use redis::aio::ConnectionManager;
use std::fmt;
use std::time::Duration;
use tracing::instrument;

/// How the cache connection authenticates.
///
/// `Disabled` is an explicit deployment mode: no credential is sent even if
/// one was supplied.
#[derive(Clone, PartialEq, Eq)]
pub enum CacheAuth {
    /// Authenticate with this password
    Password(String),
    /// Connect without authentication
    Disabled,
}

impl fmt::Debug for CacheAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password(_) => f.write_str("Password(<redacted>)"),
            Self::Disabled => f.write_str("Disabled"),
        }
    }
}

/// Connection settings for the Redis backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisConfig {
    /// `host:port`, or a full `redis://` URL
    pub address: String,
    /// Authentication mode
    pub auth: CacheAuth,
}

impl RedisConfig {
    /// Create a configuration for the given address and auth mode.
    pub fn new(address: impl Into<String>, auth: CacheAuth) -> Self {
        Self {
            address: address.into(),
            auth,
        }
    }

    /// Resolve into a connection description for database 0.
    pub fn connection_info(&self) -> CacheResult<redis::ConnectionInfo> {
        let url = if self.address.contains("://") {
            self.address.clone()
        } else {
            format!("redis://{}/0", self.address)
        };

        let mut info = url.as_str().into_connection_info().map_err(|e| {
            CacheError::new(CacheErrorKind::Configuration(format!(
                "Invalid cache address '{}': {}",
                self.address, e
            )))
        })?;

        info.redis.password = match &self.auth {
            CacheAuth::Password(password) => Some(password.clone()),
            CacheAuth::Disabled => None,
        };
        Ok(info)
    }
}

/// Cache backend talking to a Redis server.
///
/// Wraps a multiplexed, auto-reconnecting connection; clones share it, so a
/// single backend can serve every message handler.
#[derive(Clone)]
pub struct RedisBackend {
    connection: ConnectionManager,
}

impl fmt::Debug for RedisBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisBackend").finish_non_exhaustive()
    }
}

impl RedisBackend {
    /// Connect to Redis.
    ///
    /// # Errors
    /// Returns an error if the address is invalid or the server cannot be reached.
    #[instrument(skip(config), fields(address = %config.address, auth = ?config.auth))]
    pub async fn connect(config: &RedisConfig) -> CacheResult<Self> {
        tracing::info!("Connecting to cache");

        let client = redis::Client::open(config.connection_info()?).map_err(|e| {
            CacheError::new(CacheErrorKind::Configuration(e.to_string()))
        })?;

        let connection = ConnectionManager::new(client).await.map_err(|e| {
            tracing::error!("Cache connection failed: {}", e);
            CacheError::new(CacheErrorKind::Connection(e.to_string()))
        })?;

        Ok(Self { connection })
    }
}

fn command_error(err: redis::RedisError) -> CacheError {
    CacheError::new(CacheErrorKind::Command(err.to_string()))
}

#[async_trait]
impl CacheBackend for RedisBackend {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut connection = self.connection.clone();
        redis::cmd("GET")
            .arg(key)
            .query_async(&mut connection)
            .await
            .map_err(command_error)
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut connection = self.connection.clone();
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl.as_secs())
            .query_async(&mut connection)
            .await
            .map_err(command_error)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> CacheResult<()> {
        let mut connection = self.connection.clone();
        let updated: i64 = redis::cmd("EXPIRE")
            .arg(key)
            .arg(ttl.as_secs())
            .query_async(&mut connection)
            .await
            .map_err(command_error)?;
        if updated == 0 {
            tracing::debug!(key, "Key vanished before expiry refresh");
        }
        Ok(())
    }

    async fn ping(&self) -> CacheResult<()> {
        let mut connection = self.connection.clone();
        let pong: String = redis::cmd("PING")
            .query_async(&mut connection)
            .await
            .map_err(|e| CacheError::new(CacheErrorKind::Connection(e.to_string())))?;
        tracing::debug!(reply = %pong, "Cache ping");
        Ok(())
    }
}

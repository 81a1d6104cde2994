//! Redis-backed session cache.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use tenantkit_auth::{TokenStore, TokenStoreError};

/// Session cache reads against the shared redis instance.
///
/// Lookups are bounded by a timeout so a wedged backend degrades into the
/// resolver's offline fallback instead of stalling the request.
#[derive(Clone)]
pub struct RedisTokenStore {
    connection: ConnectionManager,
    timeout: Duration,
}

impl RedisTokenStore {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

    pub async fn connect(redis_url: &str) -> Result<Self, TokenStoreError> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| TokenStoreError(e.to_string()))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| TokenStoreError(e.to_string()))?;

        Ok(Self {
            connection,
            timeout: Self::DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        let mut connection = self.connection.clone();

        let lookup = connection.get::<_, Option<String>>(key);
        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(TokenStoreError(e.to_string())),
            Err(_) => Err(TokenStoreError(format!(
                "redis GET timed out after {:?}",
                self.timeout
            ))),
        }
    }
}

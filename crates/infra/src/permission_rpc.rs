//! HTTP client for the remote permission service (JSON-RPC over HTTP).
//!
//! The decision endpoint is `checkAccessPermission`; every call that reaches
//! it is live (no local caching of decisions). The parse is fail-closed: a
//! response without a usable `data.hasAccess` denies and is logged for
//! diagnosis rather than surfaced as its own error kind.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::warn;

use tenantkit_auth::{AccessRequest, CheckError, PermissionChecker};

pub struct RpcPermissionChecker {
    client: reqwest::Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl RpcPermissionChecker {
    /// Bound on one decision round-trip; a slow permission service must not
    /// stall the whole request pipeline.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build permission service HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
            next_id: AtomicU64::new(1),
        }
    }

    fn extract_has_access(body: &Value) -> Option<bool> {
        // jsonrpc envelope first, bare service payload as fallback.
        body.pointer("/result/data/hasAccess")
            .or_else(|| body.pointer("/data/hasAccess"))
            .and_then(Value::as_bool)
    }
}

#[async_trait]
impl PermissionChecker for RpcPermissionChecker {
    async fn check_access(&self, request: &AccessRequest) -> Result<bool, CheckError> {
        let body = json!({
            "jsonrpc": "2.0",
            "method": "checkAccessPermission",
            "params": { "param": request.params() },
            "id": self.next_id.fetch_add(1, Ordering::Relaxed),
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| CheckError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckError::Status(status.as_u16()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| CheckError::Transport(e.to_string()))?;

        match Self::extract_has_access(&payload) {
            Some(has_access) => Ok(has_access),
            None => {
                warn!(
                    params = %serde_json::Value::from(request.params()),
                    response = %payload,
                    "permission service response had no data.hasAccess, denying"
                );
                Ok(false)
            }
        }
    }
}

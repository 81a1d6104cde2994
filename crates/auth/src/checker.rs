//! Remote permission check seam.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use tenantkit_core::{AdminId, TenantId, UserId};

/// Argument tuple for one authorization decision. Ephemeral, request-scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRequest {
    Org {
        user: UserId,
        tenant: TenantId,
        action: String,
    },
    Sys {
        admin: AdminId,
        action: String,
    },
}

impl AccessRequest {
    pub fn org(user: UserId, tenant: TenantId, action: impl Into<String>) -> Self {
        Self::Org {
            user,
            tenant,
            action: action.into(),
        }
    }

    pub fn sys(admin: AdminId, action: impl Into<String>) -> Self {
        Self::Sys {
            admin,
            action: action.into(),
        }
    }

    /// Positional params as the permission service expects them:
    /// `["user:<id>", "tenant:<id>", "<Controller@action>"]` for ORG,
    /// `[<admin id>, "<Controller@action>"]` for SYS.
    pub fn params(&self) -> Vec<Value> {
        match self {
            AccessRequest::Org {
                user,
                tenant,
                action,
            } => vec![
                Value::from(format!("user:{user}")),
                Value::from(format!("tenant:{tenant}")),
                Value::from(action.clone()),
            ],
            AccessRequest::Sys { admin, action } => {
                vec![Value::from(admin.value()), Value::from(action.clone())]
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("permission service transport error: {0}")]
    Transport(String),

    #[error("permission service returned HTTP {0}")]
    Status(u16),
}

/// Live authorization decision against the remote permission service.
///
/// Implementations must be fail-closed: a response without a usable
/// `data.hasAccess` is a deny, and callers treat `Err` as a deny too.
#[async_trait]
pub trait PermissionChecker: Send + Sync {
    async fn check_access(&self, request: &AccessRequest) -> Result<bool, CheckError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn org_params_are_prefixed() {
        let request = AccessRequest::org(
            UserId::new(7),
            TenantId::new(42),
            "UserController@index",
        );
        assert_eq!(
            request.params(),
            vec![json!("user:7"), json!("tenant:42"), json!("UserController@index")]
        );
    }

    #[test]
    fn sys_params_are_a_clean_pair() {
        let request = AccessRequest::sys(AdminId::new(3), "RoleController@store");
        assert_eq!(request.params(), vec![json!(3), json!("RoleController@store")]);
    }
}

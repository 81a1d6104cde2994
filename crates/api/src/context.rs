//! Request-scoped contexts placed into request extensions by the guards.
//!
//! Handlers read these with `Extension<...>`; nothing here is global.

use std::sync::Arc;

use tenantkit_auth::Session;
use tenantkit_core::TenantId;

/// Resolved organization-user session for the current request.
#[derive(Debug, Clone)]
pub struct OrgUserContext {
    session: Arc<Session>,
}

impl OrgUserContext {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Resolved system-admin session for the current request.
#[derive(Debug, Clone)]
pub struct SysAdminContext {
    session: Arc<Session>,
}

impl SysAdminContext {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Tenant the request operates against, fixed after the tenant-selection
/// checks pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TenantContext {
    tenant_id: TenantId,
    is_main_admin: bool,
}

impl TenantContext {
    pub fn new(tenant_id: TenantId, is_main_admin: bool) -> Self {
        Self {
            tenant_id,
            is_main_admin,
        }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    /// The subject is the tenant's main admin and skipped the permission
    /// check.
    pub fn is_main_admin(&self) -> bool {
        self.is_main_admin
    }
}

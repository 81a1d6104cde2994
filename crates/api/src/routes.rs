//! Route registration table.
//!
//! Routes are declared as [`RouteSpec`]s so a single table drives both the
//! router and the permission index: the guard sees each route's
//! [`ActionKey`] via a per-route extension (the dispatch identity), and any
//! attached [`PermissionRequirement`] is registered before the app starts
//! serving. There is no per-request reflection.

use axum::routing::{get, MethodRouter};
use axum::{Extension, Json};
use serde_json::{json, Value};

use tenantkit_auth::{ActionKey, PermissionIndex, PermissionRequirement};
use tenantkit_core::{codes, ApiResponse};

use crate::context::{OrgUserContext, SysAdminContext, TenantContext};

pub struct RouteSpec {
    pub path: &'static str,
    pub key: ActionKey,
    pub permission: Option<PermissionRequirement>,
    pub handler: MethodRouter,
}

impl RouteSpec {
    pub fn new(path: &'static str, key: ActionKey, handler: MethodRouter) -> Self {
        Self {
            path,
            key,
            permission: None,
            handler,
        }
    }

    pub fn with_permission(mut self, permission: PermissionRequirement) -> Self {
        self.permission = Some(permission);
        self
    }
}

/// Build the immutable permission index from every registered route.
pub fn build_index(org: &[RouteSpec], sys: &[RouteSpec]) -> PermissionIndex {
    let mut builder = PermissionIndex::builder();
    for spec in org.iter().chain(sys.iter()) {
        if let Some(permission) = &spec.permission {
            builder.register(spec.key, permission.clone());
        }
    }
    builder.build()
}

/// Routes served for organization users by default.
pub fn default_org_routes() -> Vec<RouteSpec> {
    vec![RouteSpec::new(
        "/org/session",
        ActionKey::new("SessionController", "show"),
        get(org_session_show),
    )]
}

/// Routes served for system admins by default.
pub fn default_sys_routes() -> Vec<RouteSpec> {
    vec![RouteSpec::new(
        "/system/session",
        ActionKey::new("AdminSessionController", "show"),
        get(sys_session_show),
    )]
}

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Dump of every registered error-code family.
pub async fn codes_index() -> Json<ApiResponse> {
    let dump: Vec<_> = codes::families().iter().map(|f| f.export()).collect();
    Json(ApiResponse::success(
        serde_json::to_value(dump).unwrap_or(Value::Null),
    ))
}

/// Current organization session, as the guard resolved it.
pub async fn org_session_show(
    Extension(user): Extension<OrgUserContext>,
    Extension(tenant): Extension<TenantContext>,
) -> Json<ApiResponse> {
    let session = user.session();
    Json(ApiResponse::success(json!({
        "id": session.subject_id,
        "tenant_id": tenant.tenant_id(),
        "is_main_admin": tenant.is_main_admin(),
        "offline_authenticated": session.offline_authenticated,
    })))
}

/// Current system-admin session.
pub async fn sys_session_show(Extension(admin): Extension<SysAdminContext>) -> Json<ApiResponse> {
    let session = admin.session();
    Json(ApiResponse::success(json!({
        "id": session.subject_id,
        "is_root": session.is_root_admin,
        "offline_authenticated": session.offline_authenticated,
    })))
}

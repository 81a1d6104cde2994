//! Per-realm guard middleware: session resolution, tenant-selection
//! invariants, and the permission check, in one pass.
//!
//! The steps are strictly ordered; each depends on what the previous one put
//! into the request. Absence of a declared requirement passes the request
//! through (fail-open), while a deny, a malformed remote response, or a
//! remote failure all reject it (fail-closed).

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info};

use tenantkit_auth::{
    AccessRequest, ActionKey, PermissionChecker, PermissionIndex, Realm, Session,
};
use tenantkit_core::codes::AuthCode;
use tenantkit_core::{i18n, AdminId, TenantId, UserId};

use crate::context::{OrgUserContext, SysAdminContext, TenantContext};
use crate::errors::code_response;
use crate::resolver::SessionResolver;

/// Header letting a caller pin the tenant explicitly instead of relying on
/// the session's selected tenant.
pub const CURRENT_TENANT_HEADER: &str = "Current-Tenant-Id";

#[derive(Clone)]
pub struct GuardState {
    pub resolver: Arc<SessionResolver>,
    pub checker: Arc<dyn PermissionChecker>,
    pub index: Arc<PermissionIndex>,
    pub exempt: Arc<HashSet<ActionKey>>,
}

/// Session-management actions exempt from tenant and permission checks.
pub fn default_exempt_actions() -> HashSet<ActionKey> {
    HashSet::from([
        ActionKey::new("AuthController", "logout"),
        ActionKey::new("AuthController", "refreshToken"),
        ActionKey::new("TenantController", "switchTenant"),
        ActionKey::new("DeviceController", "index"),
        ActionKey::new("DeviceController", "kickout"),
    ])
}

fn request_locale(req: &Request) -> &'static str {
    i18n::negotiate(
        req.headers()
            .get("Accept-Language")
            .and_then(|v| v.to_str().ok()),
    )
}

/// `Current-Tenant-Id` header, if present. Present-but-empty and unparseable
/// values get their own codes so the client can correct the right thing.
fn pinned_tenant(req: &Request) -> Result<Option<TenantId>, AuthCode> {
    let Some(raw) = req.headers().get(CURRENT_TENANT_HEADER) else {
        return Ok(None);
    };
    let value = raw.to_str().map_err(|_| AuthCode::ErrorTenantId)?.trim();
    if value.is_empty() {
        return Err(AuthCode::EmptyTenantId);
    }
    value
        .parse::<TenantId>()
        .map(Some)
        .map_err(|_| AuthCode::ErrorTenantId)
}

/// Organization-user pipeline.
pub async fn org_guard(State(state): State<GuardState>, mut req: Request, next: Next) -> Response {
    let locale = request_locale(&req);

    let session = match state.resolver.resolve(req.headers(), Realm::Org).await {
        Ok(session) => Arc::new(session),
        Err(e) => return code_response(StatusCode::UNAUTHORIZED, e.auth_code(), locale),
    };

    let action = req.extensions().get::<ActionKey>().copied();
    req.extensions_mut()
        .insert(OrgUserContext::new(session.clone()));

    // Session-management actions skip everything below.
    if action.is_some_and(|key| state.exempt.contains(&key)) {
        return next.run(req).await;
    }

    let tenant_id = match pinned_tenant(&req) {
        Err(code) => return code_response(StatusCode::FORBIDDEN, code, locale),
        Ok(Some(pinned)) => {
            if !session.authorized_for(pinned) {
                return code_response(StatusCode::FORBIDDEN, AuthCode::ErrorTenantId, locale);
            }
            pinned
        }
        Ok(None) => match session.current_tenant_id {
            Some(tenant) => tenant,
            None if session.has_tenants() => {
                return code_response(StatusCode::FORBIDDEN, AuthCode::NeedSelectTenant, locale);
            }
            None => {
                return code_response(StatusCode::FORBIDDEN, AuthCode::NeedJoinTenant, locale);
            }
        },
    };

    let is_main_admin = session.is_main_admin_of(tenant_id);
    req.extensions_mut()
        .insert(TenantContext::new(tenant_id, is_main_admin));

    // The tenant's main admin holds every permission.
    if is_main_admin {
        return next.run(req).await;
    }

    let Some(action) = action else {
        return next.run(req).await;
    };
    if state.index.lookup(&action).is_none() {
        // No declared requirement for this action: deliberately unrestricted.
        return next.run(req).await;
    }

    let check = AccessRequest::org(
        UserId::new(session.subject_id),
        tenant_id,
        action.qualified(),
    );
    authorize(&state, &session, check, req, next, locale).await
}

/// System-admin pipeline. No tenant-selection steps; `is_root_admin` takes
/// the place of the main-admin bypass.
pub async fn sys_guard(State(state): State<GuardState>, mut req: Request, next: Next) -> Response {
    let locale = request_locale(&req);

    let session = match state.resolver.resolve(req.headers(), Realm::Sys).await {
        Ok(session) => Arc::new(session),
        Err(e) => return code_response(StatusCode::UNAUTHORIZED, e.auth_code(), locale),
    };

    let action = req.extensions().get::<ActionKey>().copied();
    req.extensions_mut()
        .insert(SysAdminContext::new(session.clone()));

    if action.is_some_and(|key| state.exempt.contains(&key)) {
        return next.run(req).await;
    }

    if session.is_root_admin {
        return next.run(req).await;
    }

    let Some(action) = action else {
        return next.run(req).await;
    };
    if state.index.lookup(&action).is_none() {
        return next.run(req).await;
    }

    let check = AccessRequest::sys(AdminId::new(session.subject_id), action.qualified());
    authorize(&state, &session, check, req, next, locale).await
}

/// Remote decision shared by both realms. Every outcome other than an
/// explicit allow denies the request.
async fn authorize(
    state: &GuardState,
    session: &Session,
    check: AccessRequest,
    req: Request,
    next: Next,
    locale: &str,
) -> Response {
    match state.checker.check_access(&check).await {
        Ok(true) => {
            info!(subject = session.subject_id, request = ?check, "permission granted");
            next.run(req).await
        }
        Ok(false) => {
            info!(subject = session.subject_id, request = ?check, "permission denied");
            code_response(StatusCode::FORBIDDEN, AuthCode::AuthError, locale)
        }
        Err(e) => {
            error!(
                subject = session.subject_id,
                request = ?check,
                error = %e,
                "permission check failed, denying"
            );
            code_response(StatusCode::FORBIDDEN, AuthCode::AuthError, locale)
        }
    }
}

//! Resolved sessions and tenant memberships.
//!
//! A session is normally deserialized from the cached payload written at
//! login time; under a cache outage it is rebuilt from the token's own
//! claims, in which case it carries `offline_authenticated = true` (degraded
//! trust — downstream handlers decide whether to restrict anything).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use tenantkit_core::TenantId;

use crate::realm::Realm;

/// One tenant membership from the session payload. `admin_uid` names the
/// tenant's main administrator; holding it makes the subject that tenant's
/// main admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantGrant {
    pub tenant_id: TenantId,
    #[serde(default)]
    pub admin_uid: Option<i64>,
}

#[derive(Debug, Error)]
pub enum SessionParseError {
    #[error("session payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("session payload has no subject id")]
    MissingSubject,
}

/// A validated session for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub subject_id: i64,
    pub realm: Realm,
    /// Tenant context currently selected by the user (ORG realm).
    pub current_tenant_id: Option<TenantId>,
    pub tenants: Vec<TenantGrant>,
    /// Tenant ids the subject may pin via the `Current-Tenant-Id` header.
    /// Derived from `tenants` when the payload does not carry the list.
    pub authorized_tenants: Vec<TenantId>,
    /// SYS realm only: root administrators bypass permission checks.
    pub is_root_admin: bool,
    /// Resolved via signature decode because the cache was unreachable.
    pub offline_authenticated: bool,
    /// Full claim map, preserving opaque fields (account, mobile, email, ...).
    pub claims: Map<String, Value>,
}

impl Session {
    /// Deserialize the cached session payload (the fast path; the signature
    /// was verified at login time and is not re-checked here).
    pub fn from_cached_payload(realm: Realm, payload: &str) -> Result<Self, SessionParseError> {
        let claims: Map<String, Value> = serde_json::from_str(payload)?;
        Self::from_claims(realm, claims, false)
    }

    /// Build a session straight from token claims (the offline fallback).
    pub fn from_claims(
        realm: Realm,
        claims: Map<String, Value>,
        offline_authenticated: bool,
    ) -> Result<Self, SessionParseError> {
        let subject_id = claims
            .get("id")
            .and_then(Value::as_i64)
            .ok_or(SessionParseError::MissingSubject)?;

        let current_tenant_id = claims
            .get("current_tenant_id")
            .and_then(Value::as_i64)
            .map(TenantId::from);

        let tenants: Vec<TenantGrant> = match claims.get("tenants") {
            Some(value) => serde_json::from_value(value.clone())?,
            None => Vec::new(),
        };

        let authorized_tenants = claims
            .get("tenantsArr")
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_i64)
                    .map(TenantId::from)
                    .collect()
            })
            .unwrap_or_else(|| tenants.iter().map(|grant| grant.tenant_id).collect());

        let is_root_admin = realm == Realm::Sys
            && claims.get("is_root").map(truthy).unwrap_or(false);

        Ok(Self {
            subject_id,
            realm,
            current_tenant_id,
            tenants,
            authorized_tenants,
            is_root_admin,
            offline_authenticated,
            claims,
        })
    }

    pub fn has_tenants(&self) -> bool {
        !self.tenants.is_empty()
    }

    pub fn grant_for(&self, tenant_id: TenantId) -> Option<&TenantGrant> {
        self.tenants.iter().find(|g| g.tenant_id == tenant_id)
    }

    /// Main admin of `tenant_id`: the membership's `admin_uid` is the subject.
    pub fn is_main_admin_of(&self, tenant_id: TenantId) -> bool {
        self.grant_for(tenant_id)
            .and_then(|g| g.admin_uid)
            .is_some_and(|uid| uid == self.subject_id)
    }

    /// Main admin of the currently selected tenant.
    pub fn is_current_main_admin(&self) -> bool {
        self.current_tenant_id
            .is_some_and(|tenant| self.is_main_admin_of(tenant))
    }

    /// Whether the subject may act against `tenant_id` at all.
    pub fn authorized_for(&self, tenant_id: TenantId) -> bool {
        self.authorized_tenants.contains(&tenant_id)
    }
}

// Payloads written by older services store booleans as 0/1.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64().unwrap_or(0) != 0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cached_org_payload() {
        let payload =
            r#"{"id":7,"current_tenant_id":42,"tenants":[{"tenant_id":42,"admin_uid":7}]}"#;
        let session = Session::from_cached_payload(Realm::Org, payload).unwrap();

        assert_eq!(session.subject_id, 7);
        assert_eq!(session.current_tenant_id, Some(TenantId::new(42)));
        assert!(session.is_current_main_admin());
        assert!(!session.offline_authenticated);
        // tenantsArr absent: derived from the grants.
        assert!(session.authorized_for(TenantId::new(42)));
        assert!(!session.authorized_for(TenantId::new(43)));
    }

    #[test]
    fn non_admin_membership_is_not_main_admin() {
        let payload =
            r#"{"id":8,"current_tenant_id":42,"tenants":[{"tenant_id":42,"admin_uid":7}]}"#;
        let session = Session::from_cached_payload(Realm::Org, payload).unwrap();
        assert!(!session.is_current_main_admin());
    }

    #[test]
    fn parses_sys_payload_with_numeric_root_flag() {
        let session =
            Session::from_cached_payload(Realm::Sys, r#"{"id":3,"is_root":1}"#).unwrap();
        assert!(session.is_root_admin);

        let session =
            Session::from_cached_payload(Realm::Sys, r#"{"id":3,"is_root":false}"#).unwrap();
        assert!(!session.is_root_admin);
    }

    #[test]
    fn root_flag_is_ignored_in_org_realm() {
        let session =
            Session::from_cached_payload(Realm::Org, r#"{"id":3,"is_root":true}"#).unwrap();
        assert!(!session.is_root_admin);
    }

    #[test]
    fn opaque_claims_survive() {
        let payload = r#"{"id":7,"account":"alice","mobile":"555-0100"}"#;
        let session = Session::from_cached_payload(Realm::Org, payload).unwrap();
        assert_eq!(session.claims["account"], "alice");
        assert!(!session.has_tenants());
    }

    #[test]
    fn missing_subject_is_rejected() {
        assert!(matches!(
            Session::from_cached_payload(Realm::Org, r#"{"current_tenant_id":42}"#),
            Err(SessionParseError::MissingSubject)
        ));
        assert!(matches!(
            Session::from_cached_payload(Realm::Org, "not json"),
            Err(SessionParseError::Malformed(_))
        ));
    }
}

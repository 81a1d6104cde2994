//! Session resolution: token header → cache → (fallback) signature decode.

use std::sync::Arc;

use axum::http::HeaderMap;
use tracing::warn;

use tenantkit_auth::{Realm, Session, TokenCodec, TokenError, TokenStore};
use tenantkit_core::codes::AuthCode;

/// Why a session could not be resolved. All variants answer 401; they carry
/// different catalog codes so the client can tell "log in again" apart from
/// "refresh the token".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// No token, token not live in the cache, or an unusable cached payload.
    NeedLogin,
    /// Offline fallback decoded the token but it is past expiry.
    ExpiredToken,
    /// Offline fallback could not verify the token.
    InvalidToken,
}

impl ResolveError {
    pub fn auth_code(&self) -> AuthCode {
        match self {
            ResolveError::NeedLogin => AuthCode::NeedLogin,
            ResolveError::ExpiredToken => AuthCode::ExpiredToken,
            ResolveError::InvalidToken => AuthCode::InvalidToken,
        }
    }
}

/// Resolves a validated [`Session`] from an inbound request's headers.
pub struct SessionResolver {
    store: Arc<dyn TokenStore>,
    codec: Arc<TokenCodec>,
}

impl SessionResolver {
    pub fn new(store: Arc<dyn TokenStore>, codec: Arc<TokenCodec>) -> Self {
        Self { store, codec }
    }

    /// The realm token from its header, tolerating a `Bearer ` prefix.
    pub fn token_from_headers(headers: &HeaderMap, realm: Realm) -> Option<&str> {
        let raw = headers.get(realm.token_header())?.to_str().ok()?;
        let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
        (!token.is_empty()).then_some(token)
    }

    pub async fn resolve(
        &self,
        headers: &HeaderMap,
        realm: Realm,
    ) -> Result<Session, ResolveError> {
        let Some(token) = Self::token_from_headers(headers, realm) else {
            return Err(ResolveError::NeedLogin);
        };

        let cache_key = realm.session_cache_key(token);
        match self.store.get(&cache_key).await {
            // Fast path: the session was validated at login; the signature is
            // not re-checked here.
            Ok(Some(payload)) => match Session::from_cached_payload(realm, &payload) {
                Ok(session) => Ok(session),
                Err(e) => {
                    warn!(%realm, key = %cache_key, error = %e, "unusable cached session payload");
                    Err(ResolveError::NeedLogin)
                }
            },

            // Key absent: the token is simply not live.
            Ok(None) => Err(ResolveError::NeedLogin),

            // Backend unreachable: degrade to signature-based decode.
            Err(store_error) => self.resolve_offline(realm, token, &store_error.to_string()),
        }
    }

    fn resolve_offline(
        &self,
        realm: Realm,
        token: &str,
        store_error: &str,
    ) -> Result<Session, ResolveError> {
        match self.codec.parse_token(realm, token) {
            Ok(claims) => {
                warn!(
                    %realm,
                    token,
                    payload = %serde_json::Value::Object(claims.clone()),
                    error = store_error,
                    "token cache unavailable, accepted offline-authenticated session"
                );
                Session::from_claims(realm, claims, true).map_err(|e| {
                    warn!(%realm, token, error = %e, "offline token claims are unusable");
                    ResolveError::InvalidToken
                })
            }
            Err(TokenError::Expired) => Err(ResolveError::ExpiredToken),
            Err(_) => Err(ResolveError::InvalidToken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;
    use tenantkit_infra::MemoryTokenStore;

    fn headers_with(name: &'static str, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn resolver(store: Arc<MemoryTokenStore>) -> SessionResolver {
        SessionResolver::new(store, Arc::new(TokenCodec::new(b"org-key", b"sys-key")))
    }

    #[tokio::test]
    async fn cache_hit_resolves_without_offline_flag() {
        let store = Arc::new(MemoryTokenStore::new());
        store.insert(
            "user_token:token:abc123",
            r#"{"id":7,"current_tenant_id":42,"tenants":[{"tenant_id":42,"admin_uid":7}]}"#,
        );

        let session = resolver(store)
            .resolve(&headers_with("Org-Token", "abc123"), Realm::Org)
            .await
            .unwrap();

        assert_eq!(session.subject_id, 7);
        assert!(!session.offline_authenticated);
        assert!(session.is_current_main_admin());
    }

    #[tokio::test]
    async fn bearer_prefix_is_tolerated() {
        let store = Arc::new(MemoryTokenStore::new());
        store.insert("admin_token:t1", r#"{"id":3,"is_root":true}"#);

        let session = resolver(store)
            .resolve(&headers_with("System-Token", "Bearer t1"), Realm::Sys)
            .await
            .unwrap();
        assert!(session.is_root_admin);
    }

    #[tokio::test]
    async fn missing_header_and_cache_miss_need_login() {
        let store = Arc::new(MemoryTokenStore::new());
        let resolver = resolver(store);

        assert_eq!(
            resolver.resolve(&HeaderMap::new(), Realm::Org).await,
            Err(ResolveError::NeedLogin)
        );
        // A validly-signed token that is not live in the cache is still
        // rejected: no decode is attempted while the cache is reachable.
        let codec = TokenCodec::new(b"org-key", b"sys-key");
        let mut claims = serde_json::Map::new();
        claims.insert("id".to_string(), json!(7));
        let token = codec.create_token(Realm::Org, &claims, 3600).unwrap();
        assert_eq!(
            resolver
                .resolve(&headers_with("Org-Token", &token), Realm::Org)
                .await,
            Err(ResolveError::NeedLogin)
        );
    }

    #[tokio::test]
    async fn outage_falls_back_to_signature_decode() {
        let store = Arc::new(MemoryTokenStore::new());
        store.poison();

        let codec = TokenCodec::new(b"org-key", b"sys-key");
        let mut claims = serde_json::Map::new();
        claims.insert("id".to_string(), json!(7));
        claims.insert("current_tenant_id".to_string(), json!(42));
        let token = codec.create_token(Realm::Org, &claims, 3600).unwrap();

        let session = resolver(store)
            .resolve(&headers_with("Org-Token", &token), Realm::Org)
            .await
            .unwrap();
        assert!(session.offline_authenticated);
        assert_eq!(session.subject_id, 7);
    }

    #[tokio::test]
    async fn outage_with_expired_or_tampered_token() {
        let store = Arc::new(MemoryTokenStore::new());
        store.poison();
        let resolver = resolver(store);

        let codec = TokenCodec::new(b"org-key", b"sys-key");
        let mut claims = serde_json::Map::new();
        claims.insert("id".to_string(), json!(7));

        let expired = codec.create_token(Realm::Org, &claims, -60).unwrap();
        assert_eq!(
            resolver
                .resolve(&headers_with("Org-Token", &expired), Realm::Org)
                .await,
            Err(ResolveError::ExpiredToken)
        );

        assert_eq!(
            resolver
                .resolve(&headers_with("Org-Token", "garbage.token.here"), Realm::Org)
                .await,
            Err(ResolveError::InvalidToken)
        );
    }
}

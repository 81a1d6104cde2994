//! Compact session token signing and verification.
//!
//! One HS256 key per realm, loaded from configuration exactly once at wiring
//! time and held for the life of the process. A missing key is a deployment
//! error and is allowed to abort startup.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::realm::Realm;

#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature is valid but the token is past its `exp` claim. Mapped to a
    /// different user-facing code than [`TokenError::Invalid`].
    #[error("token has expired")]
    Expired,

    /// Bad signature, malformed token, or wrong realm key.
    #[error("token is invalid")]
    Invalid,

    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

struct RealmKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl RealmKeys {
    fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Signs and verifies session tokens for both realms.
pub struct TokenCodec {
    org: RealmKeys,
    sys: RealmKeys,
}

impl TokenCodec {
    pub fn new(org_secret: &[u8], sys_secret: &[u8]) -> Self {
        Self {
            org: RealmKeys::from_secret(org_secret),
            sys: RealmKeys::from_secret(sys_secret),
        }
    }

    fn keys(&self, realm: Realm) -> &RealmKeys {
        match realm {
            Realm::Org => &self.org,
            Realm::Sys => &self.sys,
        }
    }

    /// Sign `claims` for `realm`, adding `iat` and `exp` (now + ttl).
    pub fn create_token(
        &self,
        realm: Realm,
        claims: &Map<String, Value>,
        ttl_seconds: i64,
    ) -> Result<String, TokenError> {
        let issued_at = Utc::now().timestamp();

        let mut payload = claims.clone();
        payload.insert("iat".to_string(), Value::from(issued_at));
        payload.insert("exp".to_string(), Value::from(issued_at + ttl_seconds));

        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &self.keys(realm).encoding,
        )
        .map_err(TokenError::Signing)
    }

    /// Verify signature and expiry, returning the claim map.
    ///
    /// Expiry failures are distinguished from every other verification
    /// failure because they map to different user-facing error codes.
    pub fn parse_token(&self, realm: Realm, token: &str) -> Result<Map<String, Value>, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        jsonwebtoken::decode::<Map<String, Value>>(token, &self.keys(realm).decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn codec() -> TokenCodec {
        TokenCodec::new(b"org-secret", b"sys-secret")
    }

    fn claims() -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("id".to_string(), json!(7));
        m.insert("account".to_string(), json!("alice"));
        m
    }

    #[test]
    fn round_trip_preserves_claims_and_adds_timestamps() {
        let codec = codec();
        let token = codec.create_token(Realm::Org, &claims(), 3600).unwrap();
        let parsed = codec.parse_token(Realm::Org, &token).unwrap();

        assert_eq!(parsed["id"], json!(7));
        assert_eq!(parsed["account"], json!("alice"));
        let iat = parsed["iat"].as_i64().unwrap();
        let exp = parsed["exp"].as_i64().unwrap();
        assert_eq!(exp - iat, 3600);
    }

    #[test]
    fn expired_token_is_distinguished() {
        let codec = codec();
        let token = codec.create_token(Realm::Org, &claims(), -60).unwrap();
        match codec.parse_token(Realm::Org, &token) {
            Err(TokenError::Expired) => {}
            other => panic!("expected Expired, got {other:?}"),
        }
    }

    #[test]
    fn wrong_realm_key_is_invalid() {
        let codec = codec();
        let token = codec.create_token(Realm::Org, &claims(), 3600).unwrap();
        match codec.parse_token(Realm::Sys, &token) {
            Err(TokenError::Invalid) => {}
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn tampered_token_is_invalid() {
        let codec = codec();
        let token = codec.create_token(Realm::Org, &claims(), 3600).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });
        assert!(matches!(
            codec.parse_token(Realm::Org, &tampered),
            Err(TokenError::Invalid)
        ));

        assert!(matches!(
            codec.parse_token(Realm::Org, "not-a-token"),
            Err(TokenError::Invalid)
        ));
    }
}

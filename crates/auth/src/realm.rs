//! The two authentication realms and their wire conventions.

use serde::{Deserialize, Serialize};

/// An independent authentication domain. Each realm has its own signing key,
/// token header, and cache namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Realm {
    /// Tenant/organization end-user.
    #[serde(rename = "ORG")]
    Org,
    /// System back-office administrator.
    #[serde(rename = "SYS")]
    Sys,
}

impl Realm {
    /// Request header carrying the realm's token (plain value; a leading
    /// `Bearer ` prefix is tolerated).
    pub const fn token_header(&self) -> &'static str {
        match self {
            Realm::Org => "Org-Token",
            Realm::Sys => "System-Token",
        }
    }

    /// Cache key prefix for live sessions. Shared with the other services
    /// that read the same cache, so the exact spelling matters.
    pub const fn session_key_prefix(&self) -> &'static str {
        match self {
            Realm::Org => "user_token:token:",
            Realm::Sys => "admin_token:",
        }
    }

    /// Cache key of a live session for `token`.
    pub fn session_cache_key(&self, token: &str) -> String {
        format!("{}{}", self.session_key_prefix(), token)
    }
}

/// Cache key of an organization refresh token.
pub fn org_refresh_cache_key(token: &str) -> String {
    format!("user_refresh_token:{token}")
}

impl core::fmt::Display for Realm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Realm::Org => f.write_str("ORG"),
            Realm::Sys => f.write_str("SYS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_keys_match_shared_conventions() {
        assert_eq!(
            Realm::Org.session_cache_key("abc123"),
            "user_token:token:abc123"
        );
        assert_eq!(Realm::Sys.session_cache_key("abc123"), "admin_token:abc123");
        assert_eq!(org_refresh_cache_key("abc123"), "user_refresh_token:abc123");
    }

    #[test]
    fn headers_are_realm_specific() {
        assert_eq!(Realm::Org.token_header(), "Org-Token");
        assert_eq!(Realm::Sys.token_header(), "System-Token");
    }
}

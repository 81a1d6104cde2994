//! `tenantkit-auth` — authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: the token
//! codec, session model, and permission index are pure; the cache and the
//! remote permission service are reached through the trait seams declared
//! here and implemented in `tenantkit-infra`.

pub mod checker;
pub mod codec;
pub mod permission;
pub mod realm;
pub mod session;
pub mod store;

pub use checker::{AccessRequest, CheckError, PermissionChecker};
pub use codec::{TokenCodec, TokenError};
pub use permission::{ActionKey, PermissionIndex, PermissionRequirement};
pub use realm::Realm;
pub use session::{Session, SessionParseError, TenantGrant};
pub use store::{TokenStore, TokenStoreError};

//! `tenantkit-infra` — infrastructure adapters behind the auth seams.
//!
//! Concrete token stores (redis, in-memory) and the HTTP client for the
//! remote permission service.

pub mod permission_rpc;
pub mod token_store;

pub use permission_rpc::RpcPermissionChecker;
#[cfg(feature = "redis")]
pub use token_store::redis::RedisTokenStore;
pub use token_store::memory::MemoryTokenStore;

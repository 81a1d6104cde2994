use std::sync::Arc;

use tenantkit_api::app::{build_app, AppParts};
use tenantkit_api::{guard, routes};
use tenantkit_auth::TokenCodec;
use tenantkit_infra::{RedisTokenStore, RpcPermissionChecker};

#[tokio::main]
async fn main() {
    tenantkit_observability::init();

    let org_key = secret_from_env("JWT_ORG_KEY");
    let sys_key = secret_from_env("JWT_SYS_KEY");

    let redis_url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
    let permission_url = std::env::var("PERMISSION_SERVICE_URL").unwrap_or_else(|_| {
        tracing::warn!("PERMISSION_SERVICE_URL not set; using local default");
        "http://127.0.0.1:9501/".to_string()
    });
    let micro_name = std::env::var("APP_NAME").unwrap_or_else(|_| "tenantkit".to_string());

    let store = RedisTokenStore::connect(&redis_url)
        .await
        .expect("failed to connect to redis");

    let parts = AppParts {
        store: Arc::new(store),
        checker: Arc::new(RpcPermissionChecker::new(permission_url)),
        codec: Arc::new(TokenCodec::new(org_key.as_bytes(), sys_key.as_bytes())),
        micro_name,
        exempt: guard::default_exempt_actions(),
    };

    let app = build_app(
        parts,
        routes::default_org_routes(),
        routes::default_sys_routes(),
    );

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .expect("failed to bind listener");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

fn secret_from_env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        tracing::warn!("{name} not set; using insecure dev default");
        "dev-secret".to_string()
    })
}

//! Application wiring (Axum router + guard state).

use std::collections::HashSet;
use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceBuilder;

use tenantkit_auth::{ActionKey, PermissionChecker, TokenCodec, TokenStore};
use tenantkit_core::ApiResponse;

use crate::guard::{self, GuardState};
use crate::resolver::SessionResolver;
use crate::routes::{self, RouteSpec};
use crate::trace;

/// Everything the app needs besides its route tables.
pub struct AppParts {
    pub store: Arc<dyn TokenStore>,
    pub checker: Arc<dyn PermissionChecker>,
    pub codec: Arc<TokenCodec>,
    /// Service name reported in the permission export.
    pub micro_name: String,
    pub exempt: HashSet<ActionKey>,
}

/// Build the full router: public endpoints, guarded realm routes, trace-id
/// propagation. The permission index is built from the route tables before
/// the app serves its first request and never changes afterwards.
pub fn build_app(parts: AppParts, org_specs: Vec<RouteSpec>, sys_specs: Vec<RouteSpec>) -> Router {
    let index = Arc::new(routes::build_index(&org_specs, &sys_specs));

    let state = GuardState {
        resolver: Arc::new(SessionResolver::new(parts.store, parts.codec)),
        checker: parts.checker,
        index: index.clone(),
        exempt: Arc::new(parts.exempt),
    };

    let micro_name = parts.micro_name;
    let export = move || {
        let index = index.clone();
        let micro = micro_name.clone();
        async move {
            Json(ApiResponse::success(
                serde_json::to_value(index.export(&micro, Utc::now().timestamp()))
                    .unwrap_or(Value::Null),
            ))
        }
    };

    Router::new()
        .route("/health", get(routes::health))
        .route("/codes", get(routes::codes_index))
        .route("/permissions/export", get(export))
        .merge(org_router(&state, org_specs))
        .merge(sys_router(&state, sys_specs))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(trace::trace_id)))
}

// The guard must see each route's ActionKey before it runs, so the key
// extension is layered outside the guard (outermost layer runs first).
fn org_router(state: &GuardState, specs: Vec<RouteSpec>) -> Router {
    let mut router = Router::new();
    for spec in specs {
        let handler = spec
            .handler
            .layer::<_, std::convert::Infallible>(axum::middleware::from_fn_with_state(
                state.clone(),
                guard::org_guard,
            ))
            .layer(Extension(spec.key));
        router = router.route(spec.path, handler);
    }
    router
}

fn sys_router(state: &GuardState, specs: Vec<RouteSpec>) -> Router {
    let mut router = Router::new();
    for spec in specs {
        let handler = spec
            .handler
            .layer::<_, std::convert::Infallible>(axum::middleware::from_fn_with_state(
                state.clone(),
                guard::sys_guard,
            ))
            .layer(Extension(spec.key));
        router = router.route(spec.path, handler);
    }
    router
}

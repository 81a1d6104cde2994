//! Trace-id propagation: reuse the caller's `X-Trace-Id` or mint one, and
//! echo it on the response.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub const TRACE_HEADER: &str = "X-Trace-Id";

/// Trace id of the current request, readable from extensions.
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

pub async fn trace_id(mut req: Request, next: Next) -> Response {
    let trace_id = req
        .headers()
        .get(TRACE_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

    req.extensions_mut().insert(TraceId(trace_id.clone()));

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(TRACE_HEADER, value);
    }
    response
}

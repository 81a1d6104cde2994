//! Catalog codes → uniform error responses.
//!
//! Authentication failures answer 401, tenant-state and authorization
//! failures answer 403; every body is the `{code, message, data, error,
//! timestamp}` envelope with a locale-resolved message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use tenantkit_core::codes::ErrorCode;
use tenantkit_core::{ApiResponse, BusinessError};

pub fn code_response<C: ErrorCode>(status: StatusCode, code: C, locale: &str) -> Response {
    business_response(status, &BusinessError::from_code(code, locale))
}

pub fn business_response(status: StatusCode, err: &BusinessError) -> Response {
    (status, Json(ApiResponse::from_business(err))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenantkit_core::codes::AuthCode;

    #[test]
    fn maps_code_and_locale() {
        let response = code_response(StatusCode::FORBIDDEN, AuthCode::NeedSelectTenant, "en");
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

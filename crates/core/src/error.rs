//! Business error model.
//!
//! A [`BusinessError`] is a catalog member resolved against a request locale:
//! the full code plus the rendered, already-localized message. Infrastructure
//! failures (cache, transport) have their own error types at their seams.

use thiserror::Error;

use crate::codes::ErrorCode;

/// Result type for business-rule failures.
pub type BusinessResult<T> = Result<T, BusinessError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message} (code {code})")]
pub struct BusinessError {
    pub code: i64,
    pub message: String,
}

impl BusinessError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Resolve a catalog member for `locale`.
    pub fn from_code<C: ErrorCode>(code: C, locale: &str) -> Self {
        Self {
            code: code.code(),
            message: code.localized_msg(locale).to_string(),
        }
    }

    /// Resolve a catalog member for `locale` with placeholder params.
    pub fn from_code_with<C: ErrorCode>(code: C, locale: &str, params: &[(&str, &str)]) -> Self {
        Self {
            code: code.code(),
            message: code.render(locale, params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{AuthCode, CommonCode};

    #[test]
    fn resolves_code_and_locale() {
        let err = BusinessError::from_code(AuthCode::NeedJoinTenant, "en");
        assert_eq!(err.code, 400009);
        assert_eq!(err.message, "Please create or join a tenant first");
    }

    #[test]
    fn renders_params() {
        let err = BusinessError::from_code_with(
            CommonCode::ParamsEmptyWithField,
            "en",
            &[("field", "email")],
        );
        assert_eq!(err.code, 10031);
        assert_eq!(err.message, "Field (email) cannot be empty");
    }
}

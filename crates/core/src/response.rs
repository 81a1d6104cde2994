//! Uniform response envelope.
//!
//! Every endpoint, success or failure, answers with the same JSON shape:
//! `{code, message, data, error, timestamp}`. The `error` key is only present
//! on failures.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BusinessError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    pub message: String,
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    pub timestamp: i64,
}

impl ApiResponse {
    pub fn success(data: Value) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data,
            error: None,
            timestamp: Utc::now().timestamp(),
        }
    }

    pub fn failure(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: Value::Null,
            error: Some(Value::Null),
            timestamp: Utc::now().timestamp(),
        }
    }

    pub fn failure_with_detail(code: i64, message: impl Into<String>, error: Value) -> Self {
        Self {
            error: Some(error),
            ..Self::failure(code, message)
        }
    }

    pub fn from_business(err: &BusinessError) -> Self {
        Self::failure(err.code, err.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_omits_error_key() {
        let value = serde_json::to_value(ApiResponse::success(json!({"ok": true}))).unwrap();
        assert_eq!(value["code"], 0);
        assert_eq!(value["data"]["ok"], true);
        assert!(value.get("error").is_none());
        assert!(value["timestamp"].is_i64());
    }

    #[test]
    fn failure_carries_null_error_and_data() {
        let value = serde_json::to_value(ApiResponse::failure(400001, "请登录！")).unwrap();
        assert_eq!(value["code"], 400001);
        assert_eq!(value["data"], Value::Null);
        assert_eq!(value["error"], Value::Null);
    }
}

//! ApiResponse: status code plus optional JSON body.

use serde::Serialize;
use serde_json::{json, Value};
use urpg_core::errors::UrpgErrorCode;

use crate::errors::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    /// 200 with `value` serialized as the body.
    pub fn ok<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        Ok(Self {
            status: 200,
            body: Some(serde_json::to_value(value)?),
        })
    }

    /// 404 without a body: the lookup ran and matched nothing.
    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: None,
        }
    }

    /// Status from the error, body `{"error": code, "message": text}`.
    pub fn from_error(err: &ApiError) -> Self {
        Self {
            status: err.status(),
            body: Some(json!({
                "error": err.error_code(),
                "message": err.to_string(),
            })),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Render the body, or an empty string when there is none.
    pub fn body_string(&self, pretty: bool) -> String {
        let Some(body) = &self.body else {
            return String::new();
        };
        let rendered = if pretty {
            serde_json::to_string_pretty(body)
        } else {
            serde_json::to_string(body)
        };
        // Serializing a Value cannot fail
        rendered.unwrap_or_default()
    }
}

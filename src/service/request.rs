//! # Request Body

use serde::Deserialize;
use serde_json::Value;

use super::errors::{ServiceError, ServiceResult};

/// Body accepted by every endpoint: `{"query": "..."}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: Option<Value>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(Value::String(query.into())),
        }
    }

    /// Parse a raw body. Anything that is not a JSON object yields an
    /// empty request, which then fails [`QueryRequest::text`].
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The query text.
    ///
    /// Absent, `null`, `""`, `false` and `0` count as missing. Any other
    /// non-string value cannot be lower-cased and fails as an internal error.
    pub fn text(&self) -> ServiceResult<&str> {
        match &self.query {
            Some(Value::String(text)) if !text.is_empty() => Ok(text.as_str()),
            None | Some(Value::Null) | Some(Value::Bool(false)) => Err(ServiceError::MissingQuery),
            Some(Value::String(_)) => Err(ServiceError::MissingQuery),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(ServiceError::MissingQuery),
            Some(other) => Err(ServiceError::Internal(format!(
                "query must be a string, got {}",
                json_type(other)
            ))),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

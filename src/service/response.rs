//! # Response Payloads

use serde::{Deserialize, Serialize};

use crate::store::Record;
use crate::validate::ValidationResult;

/// `/query` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub pseudo_sql: String,
    pub data: Vec<Record>,
}

/// `/explain` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// Per-field validation failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub table: String,
}

/// `/validate` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl From<ValidationResult> for ValidateResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            valid: result.valid,
            errors: result.error_detail.map(|table| ValidationErrors { table }),
        }
    }
}

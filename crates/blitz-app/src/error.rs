// crates/blitz-app/src/error.rs
// Error types for SDK calls

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Embed / open error type
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Embed rejected: {0}")]
    Rejected(String),
    #[error("SDK error: {0}")]
    Sdk(String),
    #[error("Options error: {0}")]
    Options(#[from] serde_json::Error),
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl EmbedError {
    pub fn rejected(reason: &JsValue) -> Self {
        Self::Rejected(describe(reason))
    }

    pub fn sdk(reason: &JsValue) -> Self {
        Self::Sdk(describe(reason))
    }

    pub fn conversion(reason: &JsValue) -> Self {
        Self::Conversion(describe(reason))
    }
}

/// SDK operation result type
pub type EmbedResult<T> = Result<T, EmbedError>;

/// Best-effort text for a thrown JS value
fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Error types for the extension helpers
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failures of tab/window navigation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationError {
    #[error("No active tab found or missing tab/window ID")]
    NoActiveTab,

    #[error("browser call failed: {0}")]
    Browser(String),

    #[error("invalid reuse pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl NavigationError {
    /// Convert a rejected JS promise value into a browser error
    pub fn from_js(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        NavigationError::Browser(message)
    }
}

impl From<serde_wasm_bindgen::Error> for NavigationError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        NavigationError::Serialization(err.to_string())
    }
}

impl From<NavigationError> for JsValue {
    fn from(err: NavigationError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Failures loading extension configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {field}: {source}")]
    InvalidUrl {
        field: &'static str,
        source: url::ParseError,
    },

    #[error("{field} must use http or https, got {scheme}")]
    UnsupportedScheme { field: &'static str, scheme: String },
}

/// Rejected wallet address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address must start with 0x: {0}")]
    MissingPrefix(String),

    #[error("address must be 40 hex characters after 0x: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_active_tab_message() {
        assert_eq!(
            NavigationError::NoActiveTab.to_string(),
            "No active tab found or missing tab/window ID"
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let err: ConfigError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}

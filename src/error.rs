//! API Errors
//!
//! Failure outcomes of requests against the companion server.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected, server unreachable)
    #[error("network error: {0}")]
    Network(String),
    /// The server answered outside the 2xx range
    #[error("server responded {status} {status_text}")]
    Status { status: u16, status_text: String },
    /// The response body was not what the endpoint promises
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// A browser API refused to build the request
    #[error("browser API failed: {0}")]
    Browser(String),
    #[error("no file selected")]
    NoFileSelected,
}

impl ApiError {
    pub fn from_js(value: JsValue) -> Self {
        ApiError::Browser(describe_js(&value))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Best readable form of a thrown JS value.
fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status { status: 404, status_text: "NOT FOUND".to_string() };
        assert_eq!(err.to_string(), "server responded 404 NOT FOUND");
    }

    #[test]
    fn test_no_file_message() {
        assert_eq!(ApiError::NoFileSelected.to_string(), "no file selected");
    }
}

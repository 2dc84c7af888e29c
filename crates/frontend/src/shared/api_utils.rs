//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors of a single API call
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Build a full API URL from a configured base and a path
///
/// # Arguments
/// * `base` - `ApiConfig::base_url`, empty for same origin
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("", "/api/alerts"), "/api/alerts");
/// assert_eq!(api_url("http://pharmacy.local/", "/api/alerts"), "http://pharmacy.local/api/alerts");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// GET `url` and decode the JSON body into `T`
///
/// A body that does not match `T` is a [`ApiError::Decode`], never a
/// partially filled value.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    decode_json(&text)
}

pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

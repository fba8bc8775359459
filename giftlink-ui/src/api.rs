use std::sync::OnceLock;

use thiserror::Error;

use giftlink_types::Gift;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:3060
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    // Get the current hostname from the browser
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    // If running on localhost, point to the API server on port 3060
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:3060".to_string()
    } else {
        // In production, use same origin
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// What went wrong while loading a gift. The display strings are exactly
/// what the detail page shows under its "Error: " prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network response was not ok")]
    Status(u16),
    #[error("{0}")]
    Request(String),
}

pub fn gift_url(base: &str, product_id: &str) -> String {
    format!("{base}/api/gifts/{product_id}")
}

/// Fetch one gift by id. `Ok(None)` means the API answered with a `null`
/// body, which the page renders as "Gift not found".
#[cfg(target_arch = "wasm32")]
pub async fn fetch_gift(product_id: &str) -> Result<Option<Gift>, FetchError> {
    let url = gift_url(api_base(), product_id);

    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<Option<Gift>>()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))
}

// Off-browser builds keep the same signature so callers compile; the fetch
// itself only exists in the WASM renderer.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_gift(_product_id: &str) -> Result<Option<Gift>, FetchError> {
    Err(FetchError::Request(
        "gift fetch is only available in the browser".to_string(),
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gift_url_joins_base_and_id() {
        assert_eq!(
            gift_url("http://localhost:3060", "42"),
            "http://localhost:3060/api/gifts/42"
        );
        // Same-origin production base is empty
        assert_eq!(gift_url("", "42"), "/api/gifts/42");
    }

    #[test]
    fn test_status_error_displays_fixed_message() {
        assert_eq!(
            FetchError::Status(500).to_string(),
            "Network response was not ok"
        );
        assert_eq!(
            FetchError::Status(404).to_string(),
            "Network response was not ok"
        );
    }

    #[test]
    fn test_request_error_displays_underlying_message() {
        let err = FetchError::Request("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}

//! API utilities for frontend-backend communication.

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/orders/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Extract the backend's `detail` message from an error body, falling
/// back to `fallback` when the body is not JSON or carries no detail.
pub fn detail_or(body: &str, fallback: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_extracted_from_error_body() {
        let body = r#"{"detail": "Customer not found"}"#;
        assert_eq!(
            detail_or(body, "Failed to create order"),
            "Customer not found"
        );
    }

    #[test]
    fn missing_detail_falls_back() {
        assert_eq!(detail_or("{}", "Failed to create order"), "Failed to create order");
        assert_eq!(
            detail_or(r#"{"detail": null}"#, "Failed to create order"),
            "Failed to create order"
        );
    }

    #[test]
    fn non_json_body_falls_back() {
        assert_eq!(
            detail_or("Internal Server Error", "Failed to create order"),
            "Failed to create order"
        );
        assert_eq!(detail_or("", "Failed to create customer"), "Failed to create customer");
    }
}

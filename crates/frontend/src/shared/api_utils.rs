//! API utilities for talking to the platform router.

/// Port the platform router serves the REST API on.
const ROUTER_PORT: u16 = 11015;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location.
///
/// # Returns
/// - API base URL like "http://localhost:11015"
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
    format!("{}//{}:{}", protocol, hostname, ROUTER_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("/v3/namespaces/default/streams");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

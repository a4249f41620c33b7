//! Router/query state helpers.
//!
//! Navigation state lives in the URL query string; components read what they
//! need from it instead of going through a router service.

use serde::Deserialize;
use web_sys::window;

/// Namespace used when the URL does not name one.
pub const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Default, Deserialize)]
struct RouterQuery {
    #[serde(default)]
    namespace: Option<String>,
}

/// Active namespace from the current URL query state.
///
/// Callers that must not react to later navigation read this once at
/// creation time.
pub fn current_namespace() -> String {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    namespace_from_search(&search)
}

fn namespace_from_search(search: &str) -> String {
    let query: RouterQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query
        .namespace
        .filter(|ns| !ns.is_empty())
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string())
}

//! API utilities for frontend-backend communication
//!
//! Resolves the API origin, static file URLs and the realtime endpoint from
//! the console configuration and the current window location.

use super::config::config;

/// Origin of the page host with the backend port (3000).
///
/// Returns an empty string when there is no window (native tests).
fn page_host_origin() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

fn configured_or_page_host(origin: &str) -> String {
    if origin.is_empty() {
        page_host_origin()
    } else {
        origin.to_string()
    }
}

/// Get the base URL for API requests, e.g. `"http://localhost:3000"`.
pub fn api_base() -> String {
    configured_or_page_host(&config().api.origin)
}

/// Base URL including the API prefix, e.g. `"http://localhost:3000/api"`.
pub fn api_root() -> String {
    join_url(&api_base(), &config().api.prefix)
}

/// Build a full API URL from a path relative to the API root.
///
/// ```ignore
/// let url = api_url("/product/42");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_root(), path)
}

/// Joins two URL parts with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match (base.is_empty(), path.is_empty()) {
        (true, _) => format!("/{path}"),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{path}"),
    }
}

fn is_absolute(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    ["http://", "https://", "data:", "blob:", "//"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

/// Resolves a stored file name against the static server; absolute URLs
/// are returned untouched.
pub fn resolve_static(origin: &str, prefix: &str, file: &str) -> String {
    let file = file.trim();
    if file.is_empty() || is_absolute(file) {
        return file.to_string();
    }
    let file = file.trim_start_matches('/');
    let prefix = prefix.trim_matches('/');
    // names that already carry the prefix are not prefixed twice
    let relative = if !prefix.is_empty() && file.starts_with(&format!("{prefix}/")) {
        file.to_string()
    } else {
        join_url(prefix, file).trim_start_matches('/').to_string()
    };
    join_url(origin, &relative)
}

/// URL of an uploaded file (avatar, banner, attachment, media image).
pub fn static_url(file: &str) -> String {
    let static_files = &config().static_files;
    resolve_static(
        &configured_or_page_host(&static_files.origin),
        &static_files.prefix,
        file,
    )
}

/// `ws(s)://` twin of an `http(s)://` origin.
pub fn websocket_origin(http_origin: &str) -> String {
    if let Some(rest) = http_origin.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = http_origin.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        http_origin.to_string()
    }
}

/// Realtime channel endpoint: configured URL or `/ws` on the API origin.
pub fn realtime_url() -> String {
    let configured = &config().realtime.url;
    if configured.is_empty() {
        join_url(&websocket_origin(&api_base()), "/ws")
    } else {
        configured.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_normalizes_slashes() {
        assert_eq!(join_url("http://h:3000/", "/api"), "http://h:3000/api");
        assert_eq!(join_url("http://h:3000", "api/product"), "http://h:3000/api/product");
        assert_eq!(join_url("http://h:3000/api", ""), "http://h:3000/api");
        assert_eq!(join_url("", "api"), "/api");
    }

    #[test]
    fn static_names_resolve_under_prefix() {
        assert_eq!(
            resolve_static("http://h:3000", "/static", "avatar-1.png"),
            "http://h:3000/static/avatar-1.png"
        );
        assert_eq!(
            resolve_static("http://h:3000", "/static", "/static/banner.jpg"),
            "http://h:3000/static/banner.jpg"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let cdn = "https://cdn.shop.test/img/1.png";
        assert_eq!(resolve_static("http://h:3000", "/static", cdn), cdn);
        assert_eq!(resolve_static("http://h:3000", "/static", ""), "");
    }

    #[test]
    fn websocket_origin_follows_scheme() {
        assert_eq!(websocket_origin("https://api.shop.test"), "wss://api.shop.test");
        assert_eq!(websocket_origin("http://h:3000"), "ws://h:3000");
    }
}

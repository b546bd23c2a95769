//! Deployment base path handling for history entries, links and cookies.
//!
//! When `PUBLIC_URL` is set at compile time (e.g., `/portal` when hosted under a
//! subdirectory), generated URLs are prefixed accordingly. Local builds without
//! `PUBLIC_URL` use root-anchored paths.

/// Base path for history entries and cookies (e.g., `/portal`).
///
/// Returns `None` when no base path is configured.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Turn a canonical page path into the URL pushed onto the browser history.
#[must_use]
pub fn with_base(path: &str, base: Option<&str>) -> String {
    match base {
        Some(base) if path == "/" => format!("{base}/"),
        Some(base) => format!("{base}{path}"),
        None => path.to_string(),
    }
}

/// Inverse of [`with_base`]. Paths outside the base are returned unchanged so the codec can
/// resolve them to its default.
#[must_use]
pub fn strip_base<'a>(path: &'a str, base: Option<&str>) -> &'a str {
    let Some(base) = base else {
        return path;
    };
    match path.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

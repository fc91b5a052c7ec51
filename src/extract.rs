//! Link extraction from raw source text.
//!
//! Extraction is purely lexical: each reference shape has its own regex probe
//! applied independently over the full file content. The probes share no state
//! and may overlap, so the same URL can land in more than one category. This
//! trades precision for auditability - a probe can match inside a comment or an
//! unrelated string literal, and it misses URLs built from interpolation or
//! concatenation.

use std::sync::LazyLock;

use regex::Regex;

/// Links extracted from a single file, grouped by category.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileLinks {
    pub internal_routes: Vec<String>,
    pub api_routes: Vec<String>,
    pub external_links: Vec<String>,
    pub images: Vec<String>,
    pub router_navigation: Vec<String>,
}

// href targets in Link components and anchors.
static HREF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href=["'](.*?)["']"#).unwrap());

// Programmatic navigation: router.push("...") / router.replace("...").
// Only the exact call shape with a quoted literal argument is matched.
static ROUTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"router\.(push|replace)\(["']([^"']+)["']\)"#).unwrap());

// fetch("...") with a quoted literal argument.
static FETCH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"fetch\(["']([^"']+)["']\)"#).unwrap());

// src targets ending in a known image extension, local or absolute.
static IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)src=["'](.*?\.(?:png|jpg|jpeg|svg|webp|gif))["']"#).unwrap());

/// Extract all link candidates from one file's content.
///
/// Stateless and idempotent: the same content always yields the same lists.
///
/// Classification of href and router targets by prefix:
/// - `http://` / `https://` are external links
/// - `/api/` is an API route
/// - `/` or `#` is an internal route
/// - anything else (relative paths, `mailto:`, ...) is silently dropped
pub fn extract_links(content: &str) -> FileLinks {
    let mut links = FileLinks::default();

    for cap in HREF_REGEX.captures_iter(content) {
        let url = &cap[1];
        if url.starts_with("http://") || url.starts_with("https://") {
            links.external_links.push(url.to_string());
        } else if url.starts_with("/api/") {
            links.api_routes.push(url.to_string());
        } else if url.starts_with('/') || url.starts_with('#') {
            links.internal_routes.push(url.to_string());
        }
    }

    for cap in ROUTER_REGEX.captures_iter(content) {
        let url = &cap[2];
        links.router_navigation.push(url.to_string());
        if url.starts_with("/api/") {
            links.api_routes.push(url.to_string());
        } else if url.starts_with('/') {
            links.internal_routes.push(url.to_string());
        }
    }

    for cap in FETCH_REGEX.captures_iter(content) {
        let url = &cap[1];
        // fetches to absolute URLs or non-API paths are not checked
        if url.starts_with("/api/") {
            links.api_routes.push(url.to_string());
        }
    }

    for cap in IMAGE_REGEX.captures_iter(content) {
        links.images.push(cap[1].to_string());
    }

    links
}

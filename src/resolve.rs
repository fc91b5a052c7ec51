//! Filesystem-based route resolution.
//!
//! A route string is mapped onto the Next.js app-router convention: pages live
//! at `app/<path>/page.tsx`, API handlers at `app/api/<path>/route.ts`. Dynamic
//! segments are approximated by substituting the literal `[id]` segment for
//! exactly one path segment per probe, never combinations. A route crossing two
//! independently dynamic segments therefore stays unresolved unless the
//! convention's nesting matches this single-substitution scan.

use std::path::Path;

const API_PREFIX: &str = "/api/";
const PAGE_FILE: &str = "page.tsx";
const ROUTE_FILE: &str = "route.ts";
const DYNAMIC_SEGMENT: &str = "[id]";

/// Decide whether a route resolves to a handler file under `root`.
///
/// Binary and infallible: a missing handler is a normal outcome, not an error.
///
/// Checks, first match wins:
/// 1. anchor fragments (`#...`) always resolve
/// 2. the query string is stripped before any probe
/// 3. routes on the allow-list always resolve
/// 4. API routes probe `app/api/<path>/route.ts`, literal then dynamic
/// 5. other routes probe `app/<path>/page.tsx`, literal then dynamic
pub fn route_exists(route: &str, root: &Path, allowed_routes: &[String]) -> bool {
    // Anchors point inside a page, not at a route.
    if route.starts_with('#') {
        return true;
    }

    let route = route.split('?').next().unwrap_or(route);

    if allowed_routes.iter().any(|allowed| allowed == route) {
        return true;
    }

    if let Some(api_path) = route.strip_prefix(API_PREFIX) {
        handler_exists(&root.join("app").join("api"), api_path, ROUTE_FILE)
    } else {
        let page_path = route.strip_prefix('/').unwrap_or(route);
        handler_exists(&root.join("app"), page_path, PAGE_FILE)
    }
}

/// Probe for `<base>/<route_path>/<handler>` literally, then retry with the
/// `[id]` placeholder standing in for one segment at a time, shortest prefix
/// first. Each probe substitutes the final segment of one path prefix and
/// keeps the remaining segments as-is.
fn handler_exists(base: &Path, route_path: &str, handler: &str) -> bool {
    if base.join(route_path).join(handler).exists() {
        return true;
    }

    let segments: Vec<&str> = route_path.split('/').collect();
    for i in 0..segments.len() {
        let mut probe = segments.clone();
        probe[i] = DYNAMIC_SEGMENT;
        if base.join(probe.join("/")).join(handler).exists() {
            return true;
        }
    }

    false
}

//! Per-run link aggregation.
//!
//! The index is a locally-scoped accumulator threaded through the check
//! command: per-file extraction results are merged into per-category maps from
//! URL to the set of referencing files, then each unique route is resolved
//! exactly once. BTree containers keep route listings and the JSON report in a
//! stable order.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::extract::FileLinks;

/// URL to the set of source files referencing it.
pub type RouteRefs = BTreeMap<String, BTreeSet<String>>;

/// All extracted links of one run, grouped by category and keyed by URL.
#[derive(Debug, Default, Clone, Serialize)]
pub struct LinkIndex {
    pub internal_routes: RouteRefs,
    pub api_routes: RouteRefs,
    pub external_links: RouteRefs,
    pub images: RouteRefs,
    pub router_navigation: RouteRefs,
}

/// Route category a reference was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    InternalRoute,
    ApiRoute,
}

/// Outcome of resolving one unique route. Immutable after the resolution pass.
#[derive(Debug, Clone)]
pub struct RouteStatus {
    pub kind: RouteKind,
    pub url: String,
    pub exists: bool,
    pub files: Vec<String>,
}

impl LinkIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one file's extracted links, attributing every URL to `file`.
    pub fn record(&mut self, file: &str, links: FileLinks) {
        record_urls(&mut self.internal_routes, links.internal_routes, file);
        record_urls(&mut self.api_routes, links.api_routes, file);
        record_urls(&mut self.external_links, links.external_links, file);
        record_urls(&mut self.images, links.images, file);
        record_urls(&mut self.router_navigation, links.router_navigation, file);
    }

    /// Resolve every unique route once.
    ///
    /// The internal verification set is the union of href-style internal
    /// routes and router navigation targets; a route referenced by both gets
    /// the merged, deduplicated file attribution. API routes are checked
    /// separately, so a `router.push("/api/...")` is verified under both
    /// conventions.
    pub fn resolve_routes<F>(&self, mut route_exists: F) -> Vec<RouteStatus>
    where
        F: FnMut(&str) -> bool,
    {
        let mut statuses = Vec::new();

        let mut internal: BTreeSet<&String> = self.internal_routes.keys().collect();
        internal.extend(self.router_navigation.keys());

        for route in internal {
            let mut files = BTreeSet::new();
            if let Some(refs) = self.internal_routes.get(route) {
                files.extend(refs.iter().cloned());
            }
            if let Some(refs) = self.router_navigation.get(route) {
                files.extend(refs.iter().cloned());
            }
            statuses.push(RouteStatus {
                kind: RouteKind::InternalRoute,
                url: route.clone(),
                exists: route_exists(route),
                files: files.into_iter().collect(),
            });
        }

        for (route, refs) in &self.api_routes {
            statuses.push(RouteStatus {
                kind: RouteKind::ApiRoute,
                url: route.clone(),
                exists: route_exists(route),
                files: refs.iter().cloned().collect(),
            });
        }

        statuses
    }

    /// Unique internal routes (href targets plus router navigation).
    pub fn internal_route_count(&self) -> usize {
        let mut routes: BTreeSet<&String> = self.internal_routes.keys().collect();
        routes.extend(self.router_navigation.keys());
        routes.len()
    }
}

fn record_urls(refs: &mut RouteRefs, urls: Vec<String>, file: &str) {
    for url in urls {
        refs.entry(url).or_default().insert(file.to_string());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::extract::extract_links;

    #[test]
    fn test_record_deduplicates_per_route() {
        let mut index = LinkIndex::new();
        index.record("a.tsx", extract_links(r#"<a href="/x">1</a><a href="/x">2</a>"#));
        index.record("b.tsx", extract_links(r#"<a href="/x">3</a>"#));

        assert_eq!(index.internal_routes.len(), 1);
        let refs = &index.internal_routes["/x"];
        assert_eq!(refs.len(), 2);
        assert!(refs.contains("a.tsx"));
        assert!(refs.contains("b.tsx"));
    }

    #[test]
    fn test_internal_set_unions_router_navigation() {
        let mut index = LinkIndex::new();
        index.record("a.tsx", extract_links(r#"<a href="/x">go</a>"#));
        index.record("b.tsx", extract_links(r#"router.push("/y")"#));

        assert_eq!(index.internal_route_count(), 2);

        let statuses = index.resolve_routes(|_| true);
        let internal: Vec<&str> = statuses
            .iter()
            .filter(|s| s.kind == RouteKind::InternalRoute)
            .map(|s| s.url.as_str())
            .collect();
        assert_eq!(internal, vec!["/x", "/y"]);
    }

    #[test]
    fn test_merged_file_attribution() {
        let mut index = LinkIndex::new();
        index.record("a.tsx", extract_links(r#"<a href="/x">go</a>"#));
        index.record("b.tsx", extract_links(r#"router.push("/x")"#));

        let statuses = index.resolve_routes(|_| false);
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].files, vec!["a.tsx", "b.tsx"]);
    }

    #[test]
    fn test_each_route_resolved_once() {
        let mut index = LinkIndex::new();
        index.record("a.tsx", extract_links(r#"<a href="/x">1</a>"#));
        index.record("b.tsx", extract_links(r#"<a href="/x">2</a>"#));
        index.record("c.tsx", extract_links(r#"fetch("/api/x")"#));

        let mut resolved = Vec::new();
        index.resolve_routes(|route| {
            resolved.push(route.to_string());
            true
        });
        assert_eq!(resolved, vec!["/x", "/api/x"]);
    }

    #[test]
    fn test_api_navigation_checked_both_ways() {
        let mut index = LinkIndex::new();
        index.record("a.tsx", extract_links(r#"router.push("/api/jobs")"#));

        let statuses = index.resolve_routes(|_| true);
        let kinds: Vec<RouteKind> = statuses.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![RouteKind::InternalRoute, RouteKind::ApiRoute]);
        assert!(statuses.iter().all(|s| s.url == "/api/jobs"));
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RouteKind::InternalRoute).unwrap(),
            "\"internal_route\""
        );
        assert_eq!(
            serde_json::to_string(&RouteKind::ApiRoute).unwrap(),
            "\"api_route\""
        );
    }
}

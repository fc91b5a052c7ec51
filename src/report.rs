//! JSON report model and emission.
//!
//! The report is the only artifact of a run besides console output: summary
//! counts, the broken-link list with file attribution, and the complete raw
//! link index per category.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::index::{LinkIndex, RouteKind, RouteStatus};

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total_internal_routes: usize,
    pub total_api_routes: usize,
    pub total_external_links: usize,
    pub total_images: usize,
    pub total_broken_links: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrokenLink {
    #[serde(rename = "type")]
    pub kind: RouteKind,
    pub url: String,
    pub files: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub broken_links: Vec<BrokenLink>,
    pub all_links: LinkIndex,
}

impl Report {
    /// Assemble the report from the aggregated index and the resolution pass.
    ///
    /// All totals count unique URLs. `total_broken_links` always equals
    /// `broken_links.len()`, and every entry corresponds to a route the
    /// resolver rejected.
    pub fn build(index: &LinkIndex, statuses: &[RouteStatus]) -> Report {
        let broken_links: Vec<BrokenLink> = statuses
            .iter()
            .filter(|status| !status.exists)
            .map(|status| BrokenLink {
                kind: status.kind,
                url: status.url.clone(),
                files: status.files.clone(),
            })
            .collect();

        let summary = Summary {
            total_internal_routes: index.internal_route_count(),
            total_api_routes: index.api_routes.len(),
            total_external_links: index.external_links.len(),
            total_images: index.images.len(),
            total_broken_links: broken_links.len(),
        };

        Report {
            summary,
            broken_links,
            all_links: index.clone(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::extract::extract_links;

    fn sample_index() -> LinkIndex {
        let mut index = LinkIndex::new();
        index.record(
            "app/page.tsx",
            extract_links(
                r#"
                <a href="/users">Users</a>
                <a href="/ghost">Ghost</a>
                <a href="https://example.com">Ext</a>
                <img src="/logo.png" />
                fetch("/api/orders")
                "#,
            ),
        );
        index
    }

    fn resolve(index: &LinkIndex) -> Vec<RouteStatus> {
        index.resolve_routes(|route| route == "/users" || route == "/api/orders")
    }

    #[test]
    fn test_broken_count_matches_list() {
        let index = sample_index();
        let statuses = resolve(&index);
        let report = Report::build(&index, &statuses);

        assert_eq!(report.summary.total_broken_links, report.broken_links.len());
        assert_eq!(report.broken_links.len(), 1);
        assert_eq!(report.broken_links[0].url, "/ghost");
        assert_eq!(report.broken_links[0].files, vec!["app/page.tsx"]);
    }

    #[test]
    fn test_summary_counts_unique_urls() {
        let index = sample_index();
        let statuses = resolve(&index);
        let report = Report::build(&index, &statuses);

        assert_eq!(report.summary.total_internal_routes, 2);
        assert_eq!(report.summary.total_api_routes, 1);
        assert_eq!(report.summary.total_external_links, 1);
        assert_eq!(report.summary.total_images, 1);
    }

    #[test]
    fn test_every_broken_entry_failed_resolution() {
        let index = sample_index();
        let statuses = resolve(&index);
        let report = Report::build(&index, &statuses);

        for broken in &report.broken_links {
            let status = statuses
                .iter()
                .find(|s| s.url == broken.url && s.kind == broken.kind)
                .unwrap();
            assert!(!status.exists);
        }
    }

    #[test]
    fn test_json_shape() {
        let index = sample_index();
        let statuses = resolve(&index);
        let report = Report::build(&index, &statuses);

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();

        assert_eq!(value["summary"]["total_broken_links"], 1);
        assert_eq!(value["broken_links"][0]["type"], "internal_route");
        assert_eq!(value["broken_links"][0]["url"], "/ghost");
        assert_eq!(value["all_links"]["images"]["/logo.png"][0], "app/page.tsx");
        assert_eq!(
            value["all_links"]["api_routes"]["/api/orders"][0],
            "app/page.tsx"
        );
    }

    #[test]
    fn test_write_report() {
        let dir = tempdir().unwrap();
        let index = sample_index();
        let statuses = resolve(&index);
        let report = Report::build(&index, &statuses);

        let path = dir.path().join("link_analysis_report.json");
        report.write(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["summary"]["total_internal_routes"], 2);
    }
}

//! Console report formatting and printing.
//!
//! This module is the only place that knows about terminal colors. The core
//! extraction, resolution, and aggregation logic stays free of presentation
//! concerns so it can be used as a library without printing side effects.

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;

use crate::index::{RouteKind, RouteRefs, RouteStatus};
use crate::report::Summary;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Referencing files shown per broken route before truncating.
const MAX_FILES_SHOWN: usize = 3;

pub fn print_header(root: &Path, file_count: usize) {
    println!(
        "{}",
        format!(
            "Analyzing {} source {} under {}",
            file_count,
            if file_count == 1 { "file" } else { "files" },
            root.display()
        )
        .bold()
        .blue()
    );
}

/// Print the per-route check results, internal routes first, then API routes.
pub fn print_route_checks(statuses: &[RouteStatus]) {
    println!("\n{}", "Checking internal routes...".bold());
    for status in statuses.iter().filter(|s| s.kind == RouteKind::InternalRoute) {
        print_route(status);
    }

    println!("\n{}", "Checking API routes...".bold());
    for status in statuses.iter().filter(|s| s.kind == RouteKind::ApiRoute) {
        print_route(status);
    }
}

fn print_route(status: &RouteStatus) {
    if status.exists {
        println!("{} {}", SUCCESS_MARK.green(), status.url);
        return;
    }

    println!(
        "{} {} {}",
        FAILURE_MARK.red(),
        status.url,
        "[broken]".bold().red()
    );

    let shown = status.files.len().min(MAX_FILES_SHOWN);
    for file in &status.files[..shown] {
        println!("    └─ {}", file.yellow());
    }
    let remaining = status.files.len() - shown;
    if remaining > 0 {
        println!(
            "    └─ {}",
            format!(
                "... and {} more {}",
                remaining,
                if remaining == 1 { "file" } else { "files" }
            )
            .yellow()
        );
    }
}

/// Print unique external links grouped by domain.
pub fn print_external_summary(external_links: &RouteRefs) {
    println!(
        "\n{}",
        format!("External links found: {}", external_links.len()).bold()
    );

    let mut domains: BTreeMap<&str, usize> = BTreeMap::new();
    for url in external_links.keys() {
        let domain = url.split('/').nth(2).unwrap_or("unknown");
        *domains.entry(domain).or_default() += 1;
    }
    for (domain, count) in domains {
        println!(
            "  - {}: {} {}",
            domain,
            count,
            if count == 1 { "reference" } else { "references" }
        );
    }
}

/// Print unique image references, split into local paths and absolute URLs.
pub fn print_image_summary(images: &RouteRefs) {
    let external = images.keys().filter(|url| url.starts_with("http")).count();
    let local = images.len() - external;

    println!("\n{}", format!("Images referenced: {}", images.len()).bold());
    println!("  - local: {}", local);
    println!("  - external: {}", external);
}

pub fn print_summary(summary: &Summary) {
    let line = "=".repeat(60);
    println!("\n{}", line.bold());
    println!("{}", "Analysis summary".bold());
    println!("{}\n", line.bold());

    println!("Total internal routes: {}", summary.total_internal_routes);
    println!("Total API routes: {}", summary.total_api_routes);
    println!("Total external links: {}", summary.total_external_links);
    println!("Total images: {}", summary.total_images);

    let broken = summary.total_broken_links;
    let broken_str = if broken > 0 {
        broken.to_string().bold().red()
    } else {
        broken.to_string().bold().green()
    };
    println!("\nBroken links found: {}", broken_str);
}

pub fn print_report_saved(path: &Path) {
    println!(
        "\n{} {}",
        SUCCESS_MARK.green(),
        format!("Report saved to {}", path.display()).green()
    );
}

pub fn print_scan_warning(skipped_count: usize, verbose: bool) {
    if skipped_count > 0 && !verbose {
        eprintln!(
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            skipped_count,
            "-v".cyan()
        );
    }
}

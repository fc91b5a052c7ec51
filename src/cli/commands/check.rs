use std::fs;

use anyhow::Result;
use colored::Colorize;

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use crate::config::Config;
use crate::extract::extract_links;
use crate::index::LinkIndex;
use crate::report::Report;
use crate::reporter;
use crate::resolve::route_exists;
use crate::scanner::scan_files;

/// Run the full scan: discover files, extract links, resolve every unique
/// route, print the console report, and write the JSON artifact.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let root = &cmd.common.root;
    let verbose = cmd.common.verbose;

    let config = Config::load(root)?;
    config.validate()?;

    let scan = scan_files(
        root,
        &config.source_extensions,
        &config.ignore_markers,
        verbose,
    );
    reporter::print_header(root, scan.files.len());

    let mut index = LinkIndex::new();
    for file in &scan.files {
        // Lossy decoding: a malformed file yields what it can, never aborts
        // the scan.
        let content = match fs::read(file) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                if verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        file.display(),
                        err
                    );
                }
                continue;
            }
        };

        let relative = file
            .strip_prefix(root)
            .unwrap_or(file)
            .to_string_lossy()
            .into_owned();
        index.record(&relative, extract_links(&content));
    }

    let statuses = index.resolve_routes(|route| route_exists(route, root, &config.allowed_routes));

    reporter::print_route_checks(&statuses);
    reporter::print_external_summary(&index.external_links);
    reporter::print_image_summary(&index.images);

    let report = Report::build(&index, &statuses);
    reporter::print_summary(&report.summary);
    reporter::print_scan_warning(scan.skipped_count, verbose);

    if !cmd.no_report {
        let report_path = cmd
            .report_path
            .unwrap_or_else(|| root.join(&config.report_file));
        report.write(&report_path)?;
        reporter::print_report_saved(&report_path);
    }

    Ok(if report.broken_links.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}

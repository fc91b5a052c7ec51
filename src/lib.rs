//! Routelint - broken link checker for Next.js projects
//!
//! Routelint is a CLI tool and library that statically scans the source tree of
//! a Next.js project, extracts hyperlinks, API calls, and image references, and
//! verifies that every internal or API route resolves to a handler file under
//! the app-router convention. No HTTP requests are made and no scanned code is
//! executed.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `extract`: Link extraction from source text (pattern matchers)
//! - `index`: Per-run link aggregation and route resolution pass
//! - `report`: JSON report model and emission
//! - `reporter`: Console output formatting
//! - `resolve`: Filesystem-based route resolution
//! - `scanner`: Source file discovery

pub mod cli;
pub mod config;
pub mod extract;
pub mod index;
pub mod report;
pub mod reporter;
pub mod resolve;
pub mod scanner;

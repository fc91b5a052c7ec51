use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".routelintrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extensions of source files to scan.
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    /// Path markers that exclude a file from scanning (substring match).
    #[serde(default = "default_ignore_markers")]
    pub ignore_markers: Vec<String>,
    /// Report file name, relative to the project root.
    #[serde(default = "default_report_file")]
    pub report_file: String,
    /// Routes that always resolve regardless of filesystem state.
    #[serde(default = "default_allowed_routes")]
    pub allowed_routes: Vec<String>,
}

fn default_source_extensions() -> Vec<String> {
    ["tsx", "ts", "jsx", "js"].map(String::from).to_vec()
}

fn default_ignore_markers() -> Vec<String> {
    ["node_modules", ".build"].map(String::from).to_vec()
}

fn default_report_file() -> String {
    "link_analysis_report.json".to_string()
}

fn default_allowed_routes() -> Vec<String> {
    // The site root and the NextAuth catch-all have no page.tsx/route.ts of
    // their own but are always routable.
    ["/", "/api/auth/[...nextauth]"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extensions: default_source_extensions(),
            ignore_markers: default_ignore_markers(),
            report_file: default_report_file(),
            allowed_routes: default_allowed_routes(),
        }
    }
}

impl Config {
    /// Load the config file from the project root, falling back to defaults
    /// when no file exists.
    pub fn load(root: &Path) -> Result<Config> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.source_extensions.is_empty() {
            anyhow::bail!("'sourceExtensions' must not be empty");
        }

        for route in &self.allowed_routes {
            if !route.starts_with('/') {
                anyhow::bail!("Invalid route in 'allowedRoutes': \"{}\" (must start with '/')", route);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&Config::default())?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.source_extensions, vec!["tsx", "ts", "jsx", "js"]);
        assert_eq!(config.ignore_markers, vec!["node_modules", ".build"]);
        assert_eq!(config.report_file, "link_analysis_report.json");
        assert_eq!(config.allowed_routes, vec!["/", "/api/auth/[...nextauth]"]);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "allowedRoutes": ["/", "/status"] }"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.allowed_routes, vec!["/", "/status"]);
        assert_eq!(config.source_extensions, vec!["tsx", "ts", "jsx", "js"]);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();

        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let config = Config {
            source_extensions: Vec::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_relative_allowed_route() {
        let config = Config {
            allowed_routes: vec!["status".to_string()],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.report_file, default_report_file());
    }
}

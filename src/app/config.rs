//! Session configuration: parse/write `catalog.conf`.
//!
//! The file uses simple `<key> = <value>` lines. Comments (lines starting
//! with `#`) and blank lines are ignored, as are unknown keys. Recognized keys:
//! - `name`: display name of the catalog
//! - `log_filter`: a `tracing` filter directive used when `RUST_LOG` is unset

use anyhow::{Context, Result};

/// Catalog name used when neither the command line nor a config file sets one.
pub const DEFAULT_CATALOG_NAME: &str = "Central Library";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub catalog_name: String,
    pub log_filter: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            catalog_name: DEFAULT_CATALOG_NAME.to_string(),
            log_filter: None,
        }
    }
}

impl SessionConfig {
    /// Parse configuration text. Missing keys keep their defaults.
    pub fn parse(contents: &str) -> Self {
        let mut cfg = Self::default();
        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            let (key, val) = (key.trim(), val.trim());
            if val.is_empty() {
                continue;
            }
            match key {
                "name" => cfg.catalog_name = val.to_string(),
                "log_filter" => cfg.log_filter = Some(val.to_string()),
                _ => {}
            }
        }
        cfg
    }

    /// Load configuration from `path`.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("read config {path}"))?;
        Ok(Self::parse(&contents))
    }

    /// Render the configuration in the same format [`parse`](Self::parse) reads.
    pub fn to_conf_string(&self) -> String {
        let mut buf = String::new();
        buf.push_str("# library-catalog configuration\n\n");
        buf.push_str(&format!("name = {}\n", self.catalog_name));
        match &self.log_filter {
            Some(filter) => buf.push_str(&format!("log_filter = {filter}\n")),
            None => buf.push_str("# log_filter = library_catalog=debug\n"),
        }
        buf
    }

    pub fn write_file(&self, path: &str) -> Result<()> {
        std::fs::write(path, self.to_conf_string())
            .with_context(|| format!("write config {path}"))
    }
}

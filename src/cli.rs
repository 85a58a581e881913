//! Command-line arguments.

use clap::Parser;

use crate::app;
use crate::app::config::SessionConfig;
use crate::logger;
use anyhow::{Result, bail};

/// Manage an in-memory library catalog from a text menu
#[derive(Parser, Debug, Default)]
#[command(name = "library-catalog", version, about)]
pub struct Cli {
    /// Display name of the catalog (overrides the config file)
    #[arg(long, env = "LIBRARY_CATALOG_NAME")]
    pub name: Option<String>,

    /// Read settings from a `key = value` config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Write the effective settings to this path before starting
    #[arg(long, value_name = "PATH")]
    pub write_config: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge defaults, the optional config file and command-line overrides.
    pub fn resolve_config(&self) -> Result<SessionConfig> {
        let mut cfg = match &self.config {
            Some(path) => SessionConfig::from_file(path)?,
            None => SessionConfig::default(),
        };
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                bail!("catalog name must not be empty");
            }
            cfg.catalog_name = name.clone();
        }
        Ok(cfg)
    }

    /// Resolve settings, set up logging, optionally write the config, then run the menu loop.
    pub fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        logger::init_logger(self.verbose, config.log_filter.as_deref());
        tracing::debug!(?config, "resolved configuration");

        if let Some(path) = &self.write_config {
            config.write_file(path)?;
            tracing::info!(path = %path, "wrote configuration");
        }

        app::run(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_flag_overrides_default() {
        let cli = Cli::parse_from(["library-catalog", "--name", "Town Library"]);
        let cfg = cli.resolve_config().unwrap();
        assert_eq!(cfg.catalog_name, "Town Library");
    }

    #[test]
    fn blank_name_is_rejected() {
        let cli = Cli {
            name: Some("  ".into()),
            ..Cli::default()
        };
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli {
            config: Some("/nonexistent/library-catalog.conf".into()),
            ..Cli::default()
        };
        let err = cli.resolve_config().unwrap_err();
        assert_eq!(err.to_string(), "read config /nonexistent/library-catalog.conf");
    }

    #[test]
    fn startup_error_renders_as_one_readable_line() {
        let cli = Cli {
            config: Some("/nonexistent/library-catalog.conf".into()),
            ..Cli::default()
        };
        // Fails before the logger or the menu loop is touched.
        let rendered = format!("{:#}", cli.run().unwrap_err());
        assert!(rendered.starts_with("read config /nonexistent/library-catalog.conf: "));
        assert!(rendered.contains("os error 2"));
        assert!(!rendered.contains('{'));
        assert!(!rendered.contains('\n'));
    }
}

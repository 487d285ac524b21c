//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::charts::ChartSettings;
use crate::core::constants::{canvas, files, server, stats, text};
use crate::core::error::{DashError, Result};
use crate::reporting::logging;
use crate::server::ServerSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CSV file with the product catalog
    pub data_path: Option<String>,

    /// Interface the server binds to
    pub host: Option<String>,

    /// Port the server listens on
    pub port: Option<u16>,

    /// Log every request and enable debug logging
    pub debug: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Page heading
    pub heading: Option<String>,

    /// Number of bins in the price histogram
    pub histogram_bins: Option<usize>,

    /// Minimum share of total sales for a brand to be shown on its own (0-1, exclusive)
    pub brand_share: Option<f64>,

    /// Chart canvas width in pixels
    pub chart_width: Option<u32>,

    /// Chart canvas height in pixels
    pub chart_height: Option<u32>,

    /// Write the page to this file instead of serving it
    pub export_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            host: Some(server::DEFAULT_HOST.to_string()),
            port: Some(server::DEFAULT_PORT),
            debug: Some(false),
            verbose: Some(false),
            heading: Some(text::PAGE_HEADING.to_string()),
            histogram_bins: Some(stats::HISTOGRAM_BINS),
            brand_share: Some(stats::BRAND_SHARE),
            chart_width: Some(canvas::WIDTH),
            chart_height: Some(canvas::HEIGHT),
            export_path: None, // Serve by default
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DashError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for the config file in `dir` and up to three of its parents
    pub fn load_from_dir(dir: &Path) -> Self {
        for candidate in Self::candidate_paths(dir) {
            if !candidate.is_file() {
                continue;
            }
            match Self::load_from_file(&candidate) {
                Ok(config) => return config,
                Err(e) => logging::log_warning(&format!(
                    "Ignoring config file '{}': {e}",
                    candidate.display()
                )),
            }
        }

        Self::default()
    }

    fn candidate_paths(dir: &Path) -> Vec<PathBuf> {
        (0..=files::CONFIG_SEARCH_DEPTH)
            .map(|level| {
                let mut path = dir.to_path_buf();
                for _ in 0..level {
                    path.push("..");
                }
                path.join(files::CONFIG_FILE_NAME)
            })
            .collect()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Data
        if let Some(ref data_path) = cli_config.data_path {
            self.data_path = Some(data_path.clone());
        }

        // Server
        if let Some(ref host) = cli_config.host {
            self.host = Some(host.clone());
        }
        if let Some(port) = cli_config.port {
            self.port = Some(port);
        }
        if cli_config.debug {
            self.debug = Some(true);
        }

        // Charts
        if let Some(bins) = cli_config.histogram_bins {
            self.histogram_bins = Some(bins);
        }
        if let Some(share) = cli_config.brand_share {
            self.brand_share = Some(share);
        }

        // Output
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref export_path) = cli_config.export_path {
            self.export_path = Some(export_path.clone());
        }
    }

    /// Resolved CSV path; a dashboard without data cannot be built
    pub fn data_path(&self) -> Result<&str> {
        self.data_path.as_deref().ok_or_else(|| {
            DashError::InvalidArgument(
                "No data file given. Pass a CSV path or set data_path in the config file."
                    .to_string(),
            )
        })
    }

    pub fn heading(&self) -> &str {
        self.heading.as_deref().unwrap_or(text::PAGE_HEADING)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    pub fn is_debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    pub fn chart_settings(&self) -> ChartSettings {
        ChartSettings {
            histogram_bins: self.histogram_bins.unwrap_or(stats::HISTOGRAM_BINS),
            brand_share: self.brand_share.unwrap_or(stats::BRAND_SHARE),
            width: self.chart_width.unwrap_or(canvas::WIDTH),
            height: self.chart_height.unwrap_or(canvas::HEIGHT),
        }
    }

    pub fn server_settings(&self) -> ServerSettings {
        ServerSettings {
            host: self
                .host
                .clone()
                .unwrap_or_else(|| server::DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or(server::DEFAULT_PORT),
            debug: self.debug.unwrap_or(false),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate host
        if let Some(ref host) = self.host
            && host.trim().is_empty()
        {
            return Err(DashError::Config(
                "Host cannot be empty. Expected an address such as 127.0.0.1.".to_string(),
            ));
        }

        // Validate histogram bins
        if let Some(bins) = self.histogram_bins
            && !(1..=stats::MAX_HISTOGRAM_BINS).contains(&bins)
        {
            return Err(DashError::Config(format!(
                "Histogram bin count {bins} is invalid. Expected a number between 1-{}.",
                stats::MAX_HISTOGRAM_BINS
            )));
        }

        // Validate brand share
        if let Some(share) = self.brand_share
            && !(share > 0.0 && share < 1.0)
        {
            return Err(DashError::Config(format!(
                "Brand share {share} is invalid. Expected a fraction strictly between 0 and 1."
            )));
        }

        // Validate canvas size
        for (name, value) in [("width", self.chart_width), ("height", self.chart_height)] {
            if let Some(value) = value
                && !(canvas::MIN_DIMENSION..=canvas::MAX_DIMENSION).contains(&value)
            {
                return Err(DashError::Config(format!(
                    "Chart {name} of {value}px is invalid. Expected a value between {}-{}.",
                    canvas::MIN_DIMENSION,
                    canvas::MAX_DIMENSION
                )));
            }
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Data
    pub data_path: Option<String>, // positional DATA

    // Server
    pub host: Option<String>, // --host
    pub port: Option<u16>,    // --port
    pub debug: bool,          // --debug

    // Charts
    pub histogram_bins: Option<usize>, // --bins
    pub brand_share: Option<f64>,      // --brand-share

    // Output
    pub quiet: bool,                 // --quiet
    pub verbose: bool,               // --verbose
    pub export_path: Option<String>, // --export

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

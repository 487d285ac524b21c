// Command-line interface definitions and parsing for productdash

use crate::config::CliConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// CSV file with the product catalog
    #[arg(value_name = "DATA")]
    pub data: Option<String>,

    // Server
    /// Interface to bind (default: 127.0.0.1)
    #[arg(long, value_name = "HOST", help_heading = "Server")]
    pub host: Option<String>,

    /// Port to listen on (default: 8050)
    #[arg(short = 'p', long, value_name = "PORT", help_heading = "Server")]
    pub port: Option<u16>,

    /// Log every request and enable debug output
    #[arg(long, help_heading = "Server")]
    pub debug: bool,

    // Charts
    /// Number of bins in the price histogram (default: 45)
    #[arg(long, value_name = "COUNT", help_heading = "Charts")]
    pub bins: Option<usize>,

    /// Minimum share of total sales for a brand to be shown on its own (default: 0.02)
    #[arg(long, value_name = "FRACTION", help_heading = "Charts")]
    pub brand_share: Option<f64>,

    // Output & Verbosity
    /// Write the dashboard to an HTML file instead of serving it
    #[arg(long, value_name = "PATH", help_heading = "Output & Verbosity")]
    pub export: Option<String>,

    /// Suppress all log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completions", arg_required_else_help = true)]
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed arguments into the CLI layer of the configuration
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        data_path: cli.data.clone(),
        host: cli.host.clone(),
        port: cli.port,
        debug: cli.debug,
        histogram_bins: cli.bins,
        brand_share: cli.brand_share,
        quiet: cli.quiet,
        verbose: cli.verbose,
        export_path: cli.export.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

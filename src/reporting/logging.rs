use crate::charts::{BrandAggregate, ChartKind};
use crate::config::Config;
use log::{debug, error, info, warn};
use std::path::Path;

/// Pick the log level: quiet wins, then debug, then verbose
pub fn level_for(verbose: bool, debug: bool, quiet: bool) -> log::LevelFilter {
    if quiet {
        log::LevelFilter::Off
    } else if debug {
        log::LevelFilter::Debug
    } else if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    }
}

/// Initialize the logger with appropriate level based on verbosity
///
/// Called before the config file is read, so warnings about that file are
/// shown. [`set_level`] adjusts the level once the config is merged.
pub fn init_logger(verbose: bool, debug: bool, quiet: bool) {
    // The builder accepts everything; the global max level does the gating
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    set_level(verbose, debug, quiet);
}

/// Change the active log level after initialization
pub fn set_level(verbose: bool, debug: bool, quiet: bool) {
    let level = level_for(verbose, debug, quiet);
    log::set_max_level(level);
    debug!("Log level set to {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let settings = config.chart_settings();
    let server = config.server_settings();

    info!(
        "Configuration: host={}, port={}, debug={}",
        server.host, server.port, server.debug
    );
    info!(
        "Charts: bins={}, brand_share={}, canvas={}x{}",
        settings.histogram_bins, settings.brand_share, settings.width, settings.height
    );
    if let Some(path) = &config.export_path {
        info!("Export: {path}");
    }
}

/// Log the shape of the loaded table
pub fn log_table_info<P: AsRef<Path>>(rows: usize, path: P) {
    info!("Loaded {rows} product(s) from {}", path.as_ref().display());
    if rows == 0 {
        warn!("Data file has no rows, charts will be empty");
    }
}

/// Log how brands were grouped for the bar and pie charts
pub fn log_brand_aggregate(aggregate: &BrandAggregate) {
    debug!(
        "Brand aggregate: {} bucket(s), total={}, threshold={}",
        aggregate.len(),
        aggregate.grand_total(),
        aggregate.threshold()
    );
    if let Some(others) = aggregate.others() {
        debug!("  folded {others} unit(s) into the others bucket");
    }
}

/// Log a finished chart definition
pub fn log_chart_built(id: &str, kind: ChartKind, points: usize) {
    debug!("Built {kind} chart '{id}' ({points} point(s))");
}

/// Log that the server is accepting connections
pub fn log_server_start(addr: &str) {
    info!("Serving dashboard on http://{addr}/");
}

/// Log a served request (debug mode only)
pub fn log_request(method: &str, path: &str, status: u16, duration_ms: u128) {
    if status < 400 {
        debug!("{method} {path} -> {status} ({duration_ms}ms)");
    } else {
        debug!("{method} {path} -> {status} ({duration_ms}ms) ✗");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

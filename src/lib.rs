//! productdash
//!
//! Loads a product catalog CSV, derives seven charts from it and serves them
//! as one interactive HTML page.
//!
//! The pipeline is synchronous up to the page: [`data::load_table`] reads the
//! typed table, [`charts::build_charts`] derives renderer-neutral
//! [`charts::ChartDefinition`]s, and [`reporting::DashboardPage`] renders them
//! through the Plotly writer. [`server::serve`] then serves the finished page.

pub mod charts;
pub mod config;
pub mod core;
pub mod data;
pub mod reporting;
pub mod server;
pub mod stats;
pub mod ui;

pub use charts::{ChartDefinition, ChartSettings, build_charts};
pub use config::Config;
pub use crate::core::{DashError, Result};
pub use data::{ProductTable, load_table};
pub use reporting::DashboardPage;

/// Load the data file named by `config` and assemble the dashboard page.
pub fn build_dashboard(config: &Config) -> Result<DashboardPage> {
    let path = config.data_path()?;
    let table = load_table(path)?;
    reporting::logging::log_table_info(table.len(), path);

    let charts = build_charts(&table, &config.chart_settings());
    Ok(DashboardPage::new(config.heading(), charts))
}

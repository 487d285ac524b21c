//! Reporting
//!
//! Plotly figure writing, HTML page assembly and structured logging.

pub mod logging;
pub mod page;
pub mod plotly;

pub use page::DashboardPage;

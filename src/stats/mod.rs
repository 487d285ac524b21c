//! Descriptive statistics used by the chart builder

pub mod correlation;
pub mod density;
pub mod histogram;

pub use correlation::{correlation_matrix, pearson};
pub use density::{DensityCurve, gaussian_kde, silverman_bandwidth};
pub use histogram::{HistogramBin, equal_width_bins};

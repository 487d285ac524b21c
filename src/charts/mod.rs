//! Chart definitions and the builder that derives them from a product table

pub mod aggregate;
pub mod builder;
pub mod definition;

pub use aggregate::{BrandAggregate, BrandTotal};
pub use builder::{ChartSettings, build_charts};
pub use definition::{
    Annotation, Bindings, ChartDefinition, ChartKind, ChartSeries, Layout, MarkerStyle, Outline,
};

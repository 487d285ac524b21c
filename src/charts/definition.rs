//! Renderer-neutral chart definitions
//!
//! A [`ChartDefinition`] holds everything a plotting backend needs: the chart
//! kind, which columns feed which channel, layout and style parameters, and
//! the derived data itself. Writers such as [`crate::reporting::plotly`]
//! translate it to a concrete library format.

use serde::Serialize;

use crate::data::Column;
use crate::stats::HistogramBin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Histogram,
    Scatter,
    Heatmap,
    Bar,
    Pie,
    DensityContour,
    Bubble,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChartKind::Histogram => "histogram",
            ChartKind::Scatter => "scatter",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::DensityContour => "density_contour",
            ChartKind::Bubble => "bubble",
        };
        write!(f, "{name}")
    }
}

/// Which columns feed which visual channel
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Bindings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<Column>,
    /// Matrix charts bind a set of columns instead of axes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub title_x: f64,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outline {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub color: String,
    pub size: Option<f64>,
    pub outline: Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: u32,
    pub show_arrow: bool,
}

/// Derived data and styling for one chart kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSeries {
    Histogram {
        bins: Vec<HistogramBin>,
        marker: MarkerStyle,
    },
    Scatter {
        x: Vec<f64>,
        y: Vec<f64>,
        marker: MarkerStyle,
    },
    Heatmap {
        labels: Vec<String>,
        matrix: Vec<Vec<f64>>,
        color_scale: String,
        show_values: bool,
    },
    Bar {
        categories: Vec<String>,
        values: Vec<f64>,
        colors: Vec<String>,
        outline: Outline,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
        colors: Vec<String>,
        hole: f64,
        text_info: String,
        outline: Outline,
        center_annotation: Option<Annotation>,
    },
    DensityContour {
        grid: Vec<f64>,
        density: Vec<f64>,
        bandwidth: Option<f64>,
        fill: bool,
        show_labels: bool,
    },
    Bubble {
        x: Vec<f64>,
        y: Vec<f64>,
        size: Vec<f64>,
        color: Vec<f64>,
        hover: Vec<String>,
        size_max: f64,
        color_scale: String,
    },
}

impl ChartSeries {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSeries::Histogram { .. } => ChartKind::Histogram,
            ChartSeries::Scatter { .. } => ChartKind::Scatter,
            ChartSeries::Heatmap { .. } => ChartKind::Heatmap,
            ChartSeries::Bar { .. } => ChartKind::Bar,
            ChartSeries::Pie { .. } => ChartKind::Pie,
            ChartSeries::DensityContour { .. } => ChartKind::DensityContour,
            ChartSeries::Bubble { .. } => ChartKind::Bubble,
        }
    }

    /// Number of plotted data points (bins, markers, cells, slices or grid positions)
    pub fn point_count(&self) -> usize {
        match self {
            ChartSeries::Histogram { bins, .. } => bins.len(),
            ChartSeries::Scatter { x, .. } => x.len(),
            ChartSeries::Heatmap { matrix, .. } => matrix.iter().map(Vec::len).sum(),
            ChartSeries::Bar { values, .. } => values.len(),
            ChartSeries::Pie { values, .. } => values.len(),
            ChartSeries::DensityContour { density, .. } => density.len(),
            ChartSeries::Bubble { x, .. } => x.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDefinition {
    /// Stable identifier, also used as the DOM id on the page
    pub id: String,
    pub title: String,
    pub bindings: Bindings,
    pub layout: Layout,
    pub series: ChartSeries,
}

impl ChartDefinition {
    pub fn kind(&self) -> ChartKind {
        self.series.kind()
    }
}

//! Builds the seven dashboard charts from the product table.

use log::debug;

use crate::charts::aggregate::BrandAggregate;
use crate::charts::definition::{
    Annotation, Bindings, ChartDefinition, ChartSeries, Layout, MarkerStyle, Outline,
};
use crate::core::constants::{canvas, colors, stats, text};
use crate::data::{Column, ProductTable};
use crate::reporting::logging;
use crate::stats::{correlation_matrix, equal_width_bins, gaussian_kde};

/// Tunable parameters of the chart builder
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    pub histogram_bins: usize,
    /// Minimum share of total sales for a brand to get its own bar/slice
    pub brand_share: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            histogram_bins: stats::HISTOGRAM_BINS,
            brand_share: stats::BRAND_SHARE,
            width: canvas::WIDTH,
            height: canvas::HEIGHT,
        }
    }
}

/// Build every chart, in page order.
///
/// Deterministic for a given table and settings. An empty table yields the
/// same seven charts with empty series.
pub fn build_charts(table: &ProductTable, settings: &ChartSettings) -> Vec<ChartDefinition> {
    let aggregate = BrandAggregate::from_table(table, settings.brand_share);
    logging::log_brand_aggregate(&aggregate);

    let charts = vec![
        price_histogram(table, settings),
        price_reviews_scatter(table, settings),
        correlation_heatmap(table, settings),
        brand_bar(&aggregate, settings),
        brand_pie(&aggregate, settings),
        price_density(table, settings),
        price_rating_bubble(table, settings),
    ];

    for chart in &charts {
        logging::log_chart_built(&chart.id, chart.kind(), chart.series.point_count());
    }
    charts
}

fn layout(settings: &ChartSettings, x_title: Option<&str>, y_title: Option<&str>) -> Layout {
    Layout {
        width: settings.width,
        height: settings.height,
        title_x: canvas::TITLE_X,
        x_title: x_title.map(str::to_string),
        y_title: y_title.map(str::to_string),
    }
}

fn black_outline() -> Outline {
    Outline {
        color: colors::OUTLINE.to_string(),
        width: colors::OUTLINE_WIDTH,
    }
}

/// Cycle a palette over `n` entries
fn palette(colors: &[&str], n: usize) -> Vec<String> {
    colors.iter().cycle().take(n).map(|c| c.to_string()).collect()
}

pub fn price_histogram(table: &ProductTable, settings: &ChartSettings) -> ChartDefinition {
    let bins = equal_width_bins(&table.prices(), settings.histogram_bins);
    ChartDefinition {
        id: "price-histogram".to_string(),
        title: text::HISTOGRAM_TITLE.to_string(),
        bindings: Bindings {
            x: Some(Column::Price),
            ..Default::default()
        },
        layout: layout(
            settings,
            Some(Column::Price.label()),
            Some(text::FREQUENCY_AXIS),
        ),
        series: ChartSeries::Histogram {
            bins,
            marker: MarkerStyle {
                color: colors::HISTOGRAM_FILL.to_string(),
                size: None,
                outline: black_outline(),
            },
        },
    }
}

pub fn price_reviews_scatter(table: &ProductTable, settings: &ChartSettings) -> ChartDefinition {
    ChartDefinition {
        id: "price-reviews-scatter".to_string(),
        title: text::SCATTER_TITLE.to_string(),
        bindings: Bindings {
            x: Some(Column::Price),
            y: Some(Column::ReviewCount),
            ..Default::default()
        },
        layout: layout(settings, Some(Column::Price.label()), Some(text::REVIEWS_AXIS)),
        series: ChartSeries::Scatter {
            x: table.prices(),
            y: table.review_counts(),
            marker: MarkerStyle {
                color: colors::SCATTER_FILL.to_string(),
                size: Some(colors::SCATTER_MARKER_SIZE),
                outline: black_outline(),
            },
        },
    }
}

pub fn correlation_heatmap(table: &ProductTable, settings: &ChartSettings) -> ChartDefinition {
    let columns: Vec<Vec<f64>> = Column::CORRELATED
        .iter()
        .map(|&c| table.numeric_column(c).unwrap_or_default())
        .collect();
    let matrix = correlation_matrix(&columns);
    debug!("Correlation matrix: {matrix:?}");

    ChartDefinition {
        id: "correlation-heatmap".to_string(),
        title: text::HEATMAP_TITLE.to_string(),
        bindings: Bindings {
            columns: Column::CORRELATED.to_vec(),
            ..Default::default()
        },
        layout: layout(settings, None, None),
        series: ChartSeries::Heatmap {
            labels: Column::CORRELATED
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
            matrix,
            color_scale: colors::HEATMAP_SCALE.to_string(),
            show_values: true,
        },
    }
}

pub fn brand_bar(aggregate: &BrandAggregate, settings: &ChartSettings) -> ChartDefinition {
    ChartDefinition {
        id: "brand-sales-bar".to_string(),
        title: text::BAR_TITLE.to_string(),
        bindings: Bindings {
            x: Some(Column::Brand),
            y: Some(Column::QuantitySoldCode),
            color: Some(Column::Brand),
            ..Default::default()
        },
        layout: layout(settings, Some(text::BRAND_AXIS), Some(text::SALES_AXIS)),
        series: ChartSeries::Bar {
            categories: aggregate.brands(),
            values: aggregate.quantities(),
            colors: palette(&colors::QUALITATIVE, aggregate.len()),
            outline: black_outline(),
        },
    }
}

pub fn brand_pie(aggregate: &BrandAggregate, settings: &ChartSettings) -> ChartDefinition {
    ChartDefinition {
        id: "brand-sales-pie".to_string(),
        title: text::PIE_TITLE.to_string(),
        bindings: Bindings {
            x: Some(Column::Brand),
            y: Some(Column::QuantitySoldCode),
            ..Default::default()
        },
        layout: layout(settings, None, None),
        series: ChartSeries::Pie {
            labels: aggregate.brands(),
            values: aggregate.quantities(),
            colors: palette(&colors::PLASMA, aggregate.len()),
            hole: colors::PIE_HOLE,
            text_info: "percent+label".to_string(),
            outline: black_outline(),
            center_annotation: Some(Annotation {
                text: text::PIE_CENTER_ANNOTATION.to_string(),
                x: 0.5,
                y: 0.5,
                font_size: colors::ANNOTATION_FONT_SIZE,
                show_arrow: false,
            }),
        },
    }
}

pub fn price_density(table: &ProductTable, settings: &ChartSettings) -> ChartDefinition {
    let curve = gaussian_kde(
        &table.prices(),
        stats::DENSITY_GRID_POINTS,
        stats::DENSITY_EXPAND,
    );
    let (grid, density, bandwidth) = match curve {
        Some(curve) => (curve.grid, curve.density, Some(curve.bandwidth)),
        None => (Vec::new(), Vec::new(), None),
    };

    ChartDefinition {
        id: "price-density".to_string(),
        title: text::DENSITY_TITLE.to_string(),
        bindings: Bindings {
            x: Some(Column::Price),
            ..Default::default()
        },
        layout: layout(settings, Some(text::PRICE_BRL_AXIS), None),
        series: ChartSeries::DensityContour {
            grid,
            density,
            bandwidth,
            fill: true,
            show_labels: true,
        },
    }
}

pub fn price_rating_bubble(table: &ProductTable, settings: &ChartSettings) -> ChartDefinition {
    ChartDefinition {
        id: "price-rating-bubble".to_string(),
        title: text::BUBBLE_TITLE.to_string(),
        bindings: Bindings {
            x: Some(Column::Price),
            y: Some(Column::Rating),
            size: Some(Column::ReviewCount),
            color: Some(Column::Price),
            hover: Some(Column::Brand),
            ..Default::default()
        },
        layout: layout(settings, Some(text::PRICE_BRL_AXIS), Some(text::RATING_AXIS)),
        series: ChartSeries::Bubble {
            x: table.prices(),
            y: table.ratings(),
            size: table.review_counts(),
            color: table.prices(),
            hover: table.brands().into_iter().map(str::to_string).collect(),
            size_max: stats::BUBBLE_SIZE_MAX,
            color_scale: colors::BUBBLE_SCALE.to_string(),
        },
    }
}

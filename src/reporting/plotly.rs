//! Plotly.js figure writer
//!
//! Translates [`ChartDefinition`]s into `{ "data": [...], "layout": {...} }`
//! figures for `Plotly.newPlot`.

use serde_json::{Map, Value, json};

use crate::charts::{ChartDefinition, ChartSeries, Layout, MarkerStyle, Outline};

/// Build the Plotly figure for one chart.
pub fn figure(chart: &ChartDefinition) -> Value {
    let mut layout = base_layout(&chart.title, &chart.layout);
    let data = match &chart.series {
        ChartSeries::Histogram { bins, marker } => {
            layout.insert("bargap".into(), json!(0));
            let x_label = axis_name(chart, "x");
            vec![json!({
                "type": "bar",
                "name": x_label,
                "x": bins.iter().map(|b| b.center()).collect::<Vec<_>>(),
                "y": bins.iter().map(|b| b.count).collect::<Vec<_>>(),
                "width": bins.iter().map(|b| b.width()).collect::<Vec<_>>(),
                "customdata": bins.iter().map(|b| [b.start, b.end]).collect::<Vec<_>>(),
                "hovertemplate": "%{customdata[0]:.2f} - %{customdata[1]:.2f}<br>count=%{y}<extra></extra>",
                "marker": marker_json(marker),
            })]
        }
        ChartSeries::Scatter { x, y, marker } => vec![json!({
            "type": "scatter",
            "mode": "markers",
            "x": x,
            "y": y,
            "marker": marker_json(marker),
            "hovertemplate": format!(
                "{}=%{{x}}<br>{}=%{{y}}<extra></extra>",
                axis_name(chart, "x"),
                axis_name(chart, "y")
            ),
        })],
        ChartSeries::Heatmap {
            labels,
            matrix,
            color_scale,
            show_values,
        } => {
            layout.insert("yaxis".into(), json!({ "autorange": "reversed" }));
            let mut trace = json!({
                "type": "heatmap",
                "z": matrix,
                "x": labels,
                "y": labels,
                "colorscale": color_scale,
                "hovertemplate": "x=%{x}<br>y=%{y}<br>r=%{z}<extra></extra>",
            });
            if *show_values {
                trace["texttemplate"] = json!("%{z:.2f}");
            }
            vec![trace]
        }
        ChartSeries::Bar {
            categories,
            values,
            colors,
            outline,
        } => {
            layout.insert("showlegend".into(), json!(true));
            categories
                .iter()
                .zip(values)
                .zip(colors)
                .map(|((category, value), color)| {
                    json!({
                        "type": "bar",
                        "name": category,
                        "x": [category],
                        "y": [value],
                        "marker": { "color": color, "line": outline_json(outline) },
                    })
                })
                .collect()
        }
        ChartSeries::Pie {
            labels,
            values,
            colors,
            hole,
            text_info,
            outline,
            center_annotation,
        } => {
            if let Some(annotation) = center_annotation {
                layout.insert(
                    "annotations".into(),
                    json!([{
                        "text": annotation.text,
                        "x": annotation.x,
                        "y": annotation.y,
                        "font": { "size": annotation.font_size },
                        "showarrow": annotation.show_arrow,
                    }]),
                );
            }
            vec![json!({
                "type": "pie",
                "labels": labels,
                "values": values,
                "hole": hole,
                "textinfo": text_info,
                "marker": { "colors": colors, "line": outline_json(outline) },
            })]
        }
        ChartSeries::DensityContour {
            grid,
            density,
            fill,
            show_labels,
            ..
        } => {
            layout.insert(
                "yaxis".into(),
                json!({ "showticklabels": false, "showgrid": false }),
            );
            let coloring = if *fill { "fill" } else { "lines" };
            // A one-variable density drawn as a band so every x gets its level
            vec![json!({
                "type": "contour",
                "x": grid,
                "y": [0, 1],
                "z": [density, density],
                "contours": {
                    "coloring": coloring,
                    "showlabels": show_labels,
                },
                "hovertemplate": "x=%{x}<br>density=%{z}<extra></extra>",
            })]
        }
        ChartSeries::Bubble {
            x,
            y,
            size,
            color,
            hover,
            size_max,
            color_scale,
        } => {
            let x_label = axis_name(chart, "x");
            let y_label = axis_name(chart, "y");
            let size_label = chart
                .bindings
                .size
                .map(|c| c.label())
                .unwrap_or("size");
            vec![json!({
                "type": "scatter",
                "mode": "markers",
                "x": x,
                "y": y,
                "hovertext": hover,
                "marker": {
                    "size": size,
                    "sizemode": "area",
                    "sizeref": bubble_sizeref(size, *size_max),
                    "color": color,
                    "colorscale": color_scale,
                    "showscale": true,
                    "colorbar": { "title": { "text": x_label } },
                },
                "hovertemplate": format!(
                    "<b>%{{hovertext}}</b><br><br>{x_label}=%{{x}}<br>{y_label}=%{{y}}<br>{size_label}=%{{marker.size}}<extra></extra>"
                ),
            })]
        }
    };

    json!({ "data": data, "layout": Value::Object(layout) })
}

/// Area-mode scale so the largest bubble is `size_max` pixels across.
pub fn bubble_sizeref(sizes: &[f64], size_max: f64) -> f64 {
    let max = sizes
        .iter()
        .copied()
        .filter(|s| s.is_finite())
        .fold(0.0, f64::max);
    if max <= 0.0 || size_max <= 0.0 {
        1.0
    } else {
        2.0 * max / (size_max * size_max)
    }
}

fn base_layout(title: &str, layout: &Layout) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(
        "title".into(),
        json!({ "text": title, "x": layout.title_x, "xanchor": "center" }),
    );
    map.insert("width".into(), json!(layout.width));
    map.insert("height".into(), json!(layout.height));
    if let Some(x_title) = &layout.x_title {
        map.insert("xaxis".into(), json!({ "title": { "text": x_title } }));
    }
    if let Some(y_title) = &layout.y_title {
        map.insert("yaxis".into(), json!({ "title": { "text": y_title } }));
    }
    map
}

fn axis_name(chart: &ChartDefinition, axis: &str) -> &'static str {
    let column = match axis {
        "x" => chart.bindings.x,
        _ => chart.bindings.y,
    };
    column
        .map(|c| c.label())
        .unwrap_or(if axis == "x" { "x" } else { "y" })
}

fn outline_json(outline: &Outline) -> Value {
    json!({ "color": outline.color, "width": outline.width })
}

fn marker_json(marker: &MarkerStyle) -> Value {
    let mut value = json!({
        "color": marker.color,
        "line": outline_json(&marker.outline),
    });
    if let Some(size) = marker.size {
        value["size"] = json!(size);
    }
    value
}

//! Single-page HTML dashboard
//!
//! The page carries the heading, one container per chart in builder order
//! and the Plotly figures as embedded JSON. Plotly.js (loaded from its CDN)
//! draws each figure on `DOMContentLoaded`.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};

use crate::charts::ChartDefinition;
use crate::core::constants::{PLOTLY_CDN, text};
use crate::core::error::Result;
use crate::reporting::plotly;

/// Everything needed to render the dashboard document
#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub heading: String,
    pub charts: Vec<ChartDefinition>,
    /// Timestamp shown in the footer
    pub generated_at: String,
}

impl DashboardPage {
    pub fn new(heading: impl Into<String>, charts: Vec<ChartDefinition>) -> Self {
        Self {
            heading: heading.into(),
            charts,
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Render the complete HTML document
    pub fn render(&self) -> Result<String> {
        self.generate_html_content()
    }

    /// Render and write the document to `path`
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let html = self.render()?;
        fs::write(path, html)?;
        Ok(())
    }

    fn generate_html_content(&self) -> Result<String> {
        let css_styles = Self::generate_css();
        let js_scripts = Self::generate_javascript();
        let body_content = self.generate_body_content()?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - productdash</title>
    <script src="{}"></script>
    <style>{}</style>
</head>
<body>
    {}
    <script>{}</script>
</body>
</html>"#,
            escape_html(&self.heading),
            PLOTLY_CDN,
            css_styles,
            body_content,
            js_scripts
        ))
    }

    fn generate_css() -> &'static str {
        r#"
        :root {
            --bg-color: #f8fafc;
            --card-bg: #ffffff;
            --border-color: #e2e8f0;
            --text-primary: #1e293b;
            --text-secondary: #64748b;
        }

        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-primary);
            line-height: 1.6;
        }

        .container {
            max-width: 1100px;
            margin: 0 auto;
            padding: 2rem;
        }

        .header {
            text-align: center;
            margin-bottom: 2rem;
        }

        .header h1 {
            font-size: 2rem;
            font-weight: 700;
        }

        .chart-container {
            background: var(--card-bg);
            padding: 1rem;
            border-radius: 12px;
            border: 1px solid var(--border-color);
            margin-bottom: 2rem;
            box-shadow: 0 2px 4px -1px rgba(0, 0, 0, 0.06);
            overflow-x: auto;
        }

        .footer {
            text-align: center;
            color: var(--text-secondary);
            font-size: 0.875rem;
        }

        @media (max-width: 768px) {
            .container { padding: 1rem; }
            .header h1 { font-size: 1.5rem; }
        }
        "#
    }

    fn generate_body_content(&self) -> Result<String> {
        let header_section = self.generate_header_section();
        let charts_section = self.generate_charts_section()?;

        Ok(format!(
            r#"
    <div class="container">
        {}
        {}
        <p class="footer">Generated on {} by productdash</p>
    </div>
    "#,
            header_section,
            charts_section,
            escape_html(&self.generated_at)
        ))
    }

    fn generate_header_section(&self) -> String {
        format!(
            r#"<div class="header"><h1>{}</h1></div>"#,
            escape_html(&self.heading)
        )
    }

    fn generate_charts_section(&self) -> Result<String> {
        let containers: String = self
            .charts
            .iter()
            .map(|chart| {
                format!(
                    r#"
        <div class="chart-container"><div id="{}" class="chart"></div></div>"#,
                    escape_html(&chart.id)
                )
            })
            .collect();

        let figures: Vec<Value> = self
            .charts
            .iter()
            .map(|chart| json!({ "id": chart.id, "figure": plotly::figure(chart) }))
            .collect();
        let figures_json = escape_script(&serde_json::to_string(&figures)?);

        Ok(format!(
            r#"{containers}
        <script>
            window.dashboardFigures = {figures_json};
        </script>"#
        ))
    }

    fn generate_javascript() -> &'static str {
        r#"
        document.addEventListener('DOMContentLoaded', function() {
            if (typeof Plotly === 'undefined' || !window.dashboardFigures) {
                return;
            }
            window.dashboardFigures.forEach(function(entry) {
                var target = document.getElementById(entry.id);
                if (target) {
                    Plotly.newPlot(target, entry.figure.data, entry.figure.layout, { responsive: true });
                }
            });
        });
        "#
    }
}

/// Entity-escape text placed in HTML
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Keep embedded JSON from terminating its `<script>` element
pub fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\!--")
}

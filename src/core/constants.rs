/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Chart styling, page text and server defaults live here so the builder,
/// the writer and the CLI agree on them.
/// Server defaults
pub mod server {
    /// Default bind host - local only
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default bind port
    pub const DEFAULT_PORT: u16 = 8050;
}

/// Canvas and layout constants shared by every chart
pub mod canvas {
    /// Default chart width in pixels
    pub const WIDTH: u32 = 1000;
    /// Default chart height in pixels
    pub const HEIGHT: u32 = 700;
    /// Horizontal title anchor (centered)
    pub const TITLE_X: f64 = 0.5;
    /// Smallest accepted chart dimension
    pub const MIN_DIMENSION: u32 = 100;
    /// Largest accepted chart dimension
    pub const MAX_DIMENSION: u32 = 5000;
}

/// Statistical defaults for the chart builder
pub mod stats {
    /// Number of equal-width histogram bins
    pub const HISTOGRAM_BINS: usize = 45;
    /// Upper bound accepted for the histogram bin count
    pub const MAX_HISTOGRAM_BINS: usize = 1000;
    /// Share of total sales a brand needs to be shown on its own
    pub const BRAND_SHARE: f64 = 0.02;
    /// KDE evaluation grid size
    pub const DENSITY_GRID_POINTS: usize = 512;
    /// Range expansion applied to the KDE grid (fraction of the data span)
    pub const DENSITY_EXPAND: f64 = 0.1;
    /// Maximum rendered bubble diameter in pixels
    pub const BUBBLE_SIZE_MAX: f64 = 60.0;
}

/// Page and chart text
pub mod text {
    pub const PAGE_HEADING: &str = "Dashboard para visualização de gráficos";
    pub const OTHERS_LABEL: &str = "Others";
    /// Bucket label when a real brand is already called "Others"
    pub const OTHERS_GROUPED_LABEL: &str = "Others (grouped)";
    pub const PIE_CENTER_ANNOTATION: &str = "Top Marcas";

    pub const HISTOGRAM_TITLE: &str = "Distribuição dos Preços dos Produtos";
    pub const SCATTER_TITLE: &str = "Dispersão - Relação entre Preço e Número de avaliações";
    pub const HEATMAP_TITLE: &str = "Mapa de Calor de Correlação entre Variáveis";
    pub const BAR_TITLE: &str = "Vendas por Marca";
    pub const PIE_TITLE: &str = "Distribuição de Vendas por Marca";
    pub const DENSITY_TITLE: &str = "Densidade de Preços";
    pub const BUBBLE_TITLE: &str = "Relação entre Nota, Avaliações e Preço (por Marca)";

    pub const FREQUENCY_AXIS: &str = "Frequência";
    pub const REVIEWS_AXIS: &str = "Número de Avaliações";
    pub const BRAND_AXIS: &str = "Marca";
    pub const SALES_AXIS: &str = "Quantidade de Vendas";
    pub const PRICE_BRL_AXIS: &str = "Preço R$";
    pub const RATING_AXIS: &str = "Nota do Produto";
}

/// Colors and color scales
pub mod colors {
    pub const HISTOGRAM_FILL: &str = "cyan";
    pub const SCATTER_FILL: &str = "#90EE90";
    pub const OUTLINE: &str = "black";
    pub const OUTLINE_WIDTH: f64 = 1.0;
    pub const SCATTER_MARKER_SIZE: f64 = 15.0;
    pub const PIE_HOLE: f64 = 0.2;
    pub const ANNOTATION_FONT_SIZE: u32 = 15;

    pub const HEATMAP_SCALE: &str = "Viridis";
    pub const BUBBLE_SCALE: &str = "Plasma";

    /// Plotly's default qualitative palette, cycled for categorical bars
    pub const QUALITATIVE: [&str; 10] = [
        "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
        "#FF97FF", "#FECB52",
    ];

    /// Sequential Plasma palette, cycled for pie slices
    pub const PLASMA: [&str; 10] = [
        "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
        "#fdca26", "#f0f921",
    ];
}

/// Config file discovery
pub mod files {
    /// Config file name searched in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".productdash.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Plotly.js CDN URL used by the rendered page
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_constants() {
        assert_eq!(server::DEFAULT_HOST, "127.0.0.1");
        assert_eq!(server::DEFAULT_PORT, 8050);
    }

    #[test]
    fn test_canvas_constants() {
        assert_eq!(canvas::WIDTH, 1000);
        assert_eq!(canvas::HEIGHT, 700);
        assert_eq!(canvas::TITLE_X, 0.5);
    }

    #[test]
    fn test_stats_constants() {
        assert_eq!(stats::HISTOGRAM_BINS, 45);
        assert_eq!(stats::BRAND_SHARE, 0.02);
        assert_eq!(stats::BUBBLE_SIZE_MAX, 60.0);
    }

    #[test]
    fn test_palettes_are_distinct() {
        let mut qualitative = colors::QUALITATIVE.to_vec();
        qualitative.sort();
        qualitative.dedup();
        assert_eq!(qualitative.len(), colors::QUALITATIVE.len());
    }
}

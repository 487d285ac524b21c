//! Typed row schema for the product dataset

use serde::{Deserialize, Deserializer, Serialize};

/// The columns the dashboard reads from the input CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Column {
    Price,
    Rating,
    ReviewCount,
    Discount,
    QuantitySoldCode,
    Brand,
}

impl Column {
    /// Every required column, in schema order
    pub const ALL: [Column; 6] = [
        Column::Price,
        Column::Rating,
        Column::ReviewCount,
        Column::Discount,
        Column::QuantitySoldCode,
        Column::Brand,
    ];

    /// Columns of the correlation matrix, in display order
    pub const CORRELATED: [Column; 5] = [
        Column::Rating,
        Column::ReviewCount,
        Column::Discount,
        Column::Price,
        Column::QuantitySoldCode,
    ];

    /// Canonical CSV header
    pub fn header(self) -> &'static str {
        match self {
            Column::Price => "Price",
            Column::Rating => "Rating",
            Column::ReviewCount => "ReviewCount",
            Column::Discount => "Discount",
            Column::QuantitySoldCode => "QuantitySoldCode",
            Column::Brand => "Brand",
        }
    }

    /// Header used by the Portuguese catalog exports. Also the display label.
    pub fn alias(self) -> &'static str {
        match self {
            Column::Price => "Preço",
            Column::Rating => "Nota",
            Column::ReviewCount => "N_Avaliações",
            Column::Discount => "Desconto",
            Column::QuantitySoldCode => "Qtd_Vendidos_Cod",
            Column::Brand => "Marca",
        }
    }

    /// Label shown on axes, ticks and hover text
    pub fn label(self) -> &'static str {
        self.alias()
    }

    /// True when a header cell names this column
    pub fn matches(self, header: &str) -> bool {
        header == self.header() || header == self.alias()
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Column::Brand)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// One product observation.
///
/// Field aliases mirror [`Column::alias`]; unknown CSV columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Price", alias = "Preço", deserialize_with = "deserialize_finite")]
    pub price: f64,
    #[serde(rename = "Rating", alias = "Nota", deserialize_with = "deserialize_finite")]
    pub rating: f64,
    #[serde(
        rename = "ReviewCount",
        alias = "N_Avaliações",
        deserialize_with = "deserialize_count"
    )]
    pub review_count: u64,
    #[serde(rename = "Discount", alias = "Desconto", deserialize_with = "deserialize_finite")]
    pub discount: f64,
    #[serde(rename = "QuantitySoldCode", alias = "Qtd_Vendidos_Cod", deserialize_with = "deserialize_finite")]
    pub quantity_sold_code: f64,
    #[serde(rename = "Brand", alias = "Marca")]
    pub brand: String,
}

impl ProductRecord {
    /// Value of a numeric column. `None` for [`Column::Brand`].
    pub fn numeric(&self, column: Column) -> Option<f64> {
        match column {
            Column::Price => Some(self.price),
            Column::Rating => Some(self.rating),
            Column::ReviewCount => Some(self.review_count as f64),
            Column::Discount => Some(self.discount),
            Column::QuantitySoldCode => Some(self.quantity_sold_code),
            Column::Brand => None,
        }
    }
}

/// Numeric cells must hold real numbers; `NaN` and `inf` are rejected.
fn deserialize_finite<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(format!(
            "expected a finite number, got '{value}'"
        )))
    }
}

/// Review counts are integers, but spreadsheet exports often write them as `12.0`.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let s = s.trim();
    if let Ok(n) = s.parse::<u64>() {
        return Ok(n);
    }
    match s.parse::<f64>() {
        Ok(n) if n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64 => Ok(n as u64),
        _ => Err(serde::de::Error::custom(format!(
            "expected a non-negative integer review count, got '{s}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_alias_match() {
        for column in Column::ALL {
            assert!(column.matches(column.header()));
            assert!(column.matches(column.alias()));
            assert!(!column.matches("Unrelated"));
        }
    }

    #[test]
    fn test_correlated_columns_are_numeric() {
        assert!(Column::CORRELATED.iter().all(|c| c.is_numeric()));
        assert!(!Column::Brand.is_numeric());
    }

    #[test]
    fn test_numeric_accessor() {
        let record = ProductRecord {
            price: 10.5,
            rating: 4.0,
            review_count: 12,
            discount: 0.15,
            quantity_sold_code: 3.0,
            brand: "Acme".to_string(),
        };
        assert_eq!(record.numeric(Column::Price), Some(10.5));
        assert_eq!(record.numeric(Column::ReviewCount), Some(12.0));
        assert_eq!(record.numeric(Column::Brand), None);
    }

    #[test]
    fn test_display_uses_canonical_header() {
        assert_eq!(Column::QuantitySoldCode.to_string(), "QuantitySoldCode");
    }
}

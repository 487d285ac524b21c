use crate::data::record::{Column, ProductRecord};

/// Immutable in-memory product table.
///
/// Built once by the loader and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductTable {
    records: Vec<ProductRecord>,
}

impl ProductTable {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.price).collect()
    }

    pub fn ratings(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.rating).collect()
    }

    pub fn review_counts(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.review_count as f64).collect()
    }

    pub fn brands(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.brand.as_str()).collect()
    }

    /// Values of one numeric column, `None` for [`Column::Brand`]
    pub fn numeric_column(&self, column: Column) -> Option<Vec<f64>> {
        if !column.is_numeric() {
            return None;
        }
        Some(
            self.records
                .iter()
                .filter_map(|r| r.numeric(column))
                .collect(),
        )
    }
}

impl From<Vec<ProductRecord>> for ProductTable {
    fn from(records: Vec<ProductRecord>) -> Self {
        Self::new(records)
    }
}

//! Sales totals per brand, with small brands folded into one bucket

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::constants::text::{OTHERS_GROUPED_LABEL, OTHERS_LABEL};
use crate::data::ProductTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandTotal {
    pub brand: String,
    pub quantity: f64,
    /// True for the synthetic bucket holding every below-threshold brand
    pub is_others: bool,
}

/// Brand totals shared by the bar and pie charts.
///
/// Brands whose summed quantity reaches `share * grand_total` are kept in
/// ascending name order; the rest are summed into a trailing [`OTHERS_LABEL`]
/// entry, which exists only when that sum is non-zero. If a kept brand is
/// itself called [`OTHERS_LABEL`], the bucket is labeled
/// [`OTHERS_GROUPED_LABEL`] so the two never share a slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BrandAggregate {
    entries: Vec<BrandTotal>,
    grand_total: f64,
    threshold: f64,
}

impl BrandAggregate {
    pub fn from_table(table: &ProductTable, share: f64) -> Self {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for record in table.records() {
            *totals.entry(record.brand.clone()).or_insert(0.0) += record.quantity_sold_code;
        }
        Self::from_totals(totals, share)
    }

    pub fn from_totals(totals: BTreeMap<String, f64>, share: f64) -> Self {
        let threshold = share * totals.values().sum::<f64>();

        let mut entries = Vec::with_capacity(totals.len() + 1);
        let mut others = 0.0;
        for (brand, quantity) in totals {
            if quantity >= threshold {
                entries.push(BrandTotal {
                    brand,
                    quantity,
                    is_others: false,
                });
            } else {
                others += quantity;
            }
        }

        if others != 0.0 {
            let brand = if entries.iter().any(|e| e.brand == OTHERS_LABEL) {
                OTHERS_GROUPED_LABEL
            } else {
                OTHERS_LABEL
            };
            entries.push(BrandTotal {
                brand: brand.to_string(),
                quantity: others,
                is_others: true,
            });
        }

        // Summed in entry order so the entries add up to exactly this value
        let grand_total = entries.iter().map(|e| e.quantity).sum();

        Self {
            entries,
            grand_total,
            threshold,
        }
    }

    pub fn entries(&self) -> &[BrandTotal] {
        &self.entries
    }

    pub fn brands(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.brand.clone()).collect()
    }

    pub fn quantities(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.quantity).collect()
    }

    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Quantity of the folded bucket, if one was created
    pub fn others(&self) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.is_others)
            .map(|e| e.quantity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

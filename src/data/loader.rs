//! CSV product data loader.
//!
//! Parses a catalog export into a [`ProductTable`]. The header must name the
//! six required columns, either by canonical name or by the Portuguese alias:
//!   Price|Preço, Rating|Nota, ReviewCount|N_Avaliações, Discount|Desconto,
//!   QuantitySoldCode|Qtd_Vendidos_Cod, Brand|Marca

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::debug;

use crate::core::error::{DashError, Result};
use crate::data::record::{Column, ProductRecord};
use crate::data::table::ProductTable;

/// Load the product table from a CSV file path.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<ProductTable> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DashError::FileNotFound(path.display().to_string()));
    }
    let file = File::open(path)?;
    let table = read_table(file)?;
    debug!("Loaded {} row(s) from {}", table.len(), path.display());
    Ok(table)
}

/// Load the product table from any CSV reader.
pub fn read_table<R: Read>(reader: R) -> Result<ProductTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    check_columns(&headers)?;

    let mut records = Vec::new();
    for result in csv_reader.deserialize::<ProductRecord>() {
        records.push(result.map_err(into_parse_error)?);
    }

    Ok(ProductTable::new(records))
}

/// Fail with every required column the header does not provide.
pub fn check_columns(headers: &StringRecord) -> Result<()> {
    let missing: Vec<String> = Column::ALL
        .iter()
        .filter(|column| !headers.iter().any(|h| column.matches(h)))
        .map(|column| column.header().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DashError::MissingColumns(missing))
    }
}

fn into_parse_error(err: csv::Error) -> DashError {
    if let csv::ErrorKind::Deserialize { pos, err: de_err } = err.kind() {
        let line = pos.as_ref().map(|p| p.line()).unwrap_or(0);
        let message = match de_err.field() {
            Some(field) => format!("field {}: {}", field + 1, de_err),
            None => de_err.to_string(),
        };
        return DashError::Parse { line, message };
    }
    DashError::Csv(err)
}

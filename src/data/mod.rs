//! Product data loading
//!
//! Typed record schema, the immutable table and the CSV loader.

pub mod loader;
pub mod record;
pub mod table;

pub use loader::{load_table, read_table};
pub use record::{Column, ProductRecord};
pub use table::ProductTable;

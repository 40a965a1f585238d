//! Turns SQL `CREATE TABLE` statements into a YAML description of each
//! table's columns, their semantic types and placeholder constraints.

pub mod classifier;
pub mod convert;
pub mod error;
pub mod metadata;
pub mod parser;

pub use classifier::SemanticType;
pub use convert::{convert, convert_file, convert_str, parse_sql, render_yaml};
pub use error::ConvertError;
pub use metadata::{ColumnInfo, ConversionSummary, Metadata, OrderedMap, TableMetadata};

use crate::classifier::classify_column;
use crate::error::ConvertError;
use crate::metadata::{ConversionSummary, Metadata, TableMetadata};
use crate::parser::TableExtractor;
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Build the metadata for every `CREATE TABLE` statement in `sql`.
///
/// Fails on the first column fragment that has no type token; nothing is
/// skipped.
pub fn parse_sql(sql: &str) -> Result<Metadata, ConvertError> {
    let extractor = TableExtractor::new()?;
    let mut metadata = Metadata::default();

    let tables = extractor.tables(sql);
    if tables.is_empty() {
        warn!("no CREATE TABLE statements found");
    }

    for table in tables {
        let mut table_metadata = TableMetadata::default();
        for column in table.columns()? {
            let info = classify_column(column.name, column.sql_type);
            match info.semantic_type {
                Some(semantic) => debug!(
                    "{}.{}: {} -> {}",
                    table.name, column.name, column.sql_type, semantic
                ),
                None => warn!(
                    "{}.{}: unrecognised type '{}'",
                    table.name, column.name, column.sql_type
                ),
            }
            if table_metadata.columns.insert(column.name, info).is_some() {
                warn!("{}.{} declared more than once", table.name, column.name);
            }
        }
        debug!(
            "table {} has {} column(s)",
            table.name,
            table_metadata.columns.len()
        );
        if metadata
            .collections
            .insert(table.name, table_metadata)
            .is_some()
        {
            warn!("table {} declared more than once", table.name);
        }
    }

    Ok(metadata)
}

/// Block-style YAML with keys in insertion order.
pub fn render_yaml(metadata: &Metadata) -> Result<String, ConvertError> {
    Ok(serde_yaml::to_string(metadata)?)
}

pub fn convert_str(sql: &str) -> Result<String, ConvertError> {
    render_yaml(&parse_sql(sql)?)
}

/// Convert the SQL file at `sql_path` and write the YAML to `yaml_path`,
/// replacing anything already there.
pub fn convert_file(
    sql_path: impl AsRef<Path>,
    yaml_path: impl AsRef<Path>,
) -> Result<ConversionSummary, ConvertError> {
    let sql_path = sql_path.as_ref();
    let yaml_path = yaml_path.as_ref();

    debug!("reading {}", sql_path.display());
    let sql = fs::read_to_string(sql_path).map_err(|e| ConvertError::read(sql_path, e))?;

    let metadata = parse_sql(&sql)?;
    let yaml = render_yaml(&metadata)?;

    fs::write(yaml_path, yaml).map_err(|e| ConvertError::write(yaml_path, e))?;

    let summary = metadata.summary();
    info!("wrote {} ({})", yaml_path.display(), summary);
    Ok(summary)
}

pub fn convert(
    sql_path: impl AsRef<Path>,
    yaml_path: impl AsRef<Path>,
) -> Result<(), ConvertError> {
    convert_file(sql_path, yaml_path).map(|_| ())
}

use crate::commands::convert::{resolve_paths, ConvertArgs};
use clap::Args;
use common::error::SqlMetaError;
use converter::{convert_str, ConvertError};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// SQL file to read, overrides `source` in sqlmeta.yml
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,
}

/// Render the metadata for the configured SQL file without writing it.
pub fn render_inspect(
    args: &InspectArgs,
    config_path: Option<PathBuf>,
) -> Result<String, SqlMetaError> {
    let convert_args = ConvertArgs {
        input: args.input.clone(),
        output: None,
    };
    let cfg = resolve_paths(&convert_args, config_path)?;
    let sql = fs::read_to_string(&cfg.source)
        .map_err(|e| SqlMetaError::convert(ConvertError::read(&cfg.source, e)))?;
    convert_str(&sql).map_err(SqlMetaError::convert)
}

pub fn handle_inspect(
    args: &InspectArgs,
    config_path: Option<PathBuf>,
) -> Result<(), SqlMetaError> {
    let yaml = render_inspect(args, config_path)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(yaml.as_bytes())
        .map_err(SqlMetaError::convert)?;
    stdout.flush().map_err(SqlMetaError::convert)
}

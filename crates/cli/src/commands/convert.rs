use clap::Args;
use common::config::loader::read_config;
use common::config::project::ConverterConfig;
use common::error::SqlMetaError;
use common::traits::IsFileExtension;
use converter::{convert_file, ConversionSummary};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// SQL file to read, overrides `source` in sqlmeta.yml
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// YAML file to write, overrides `destination` in sqlmeta.yml
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn resolve_paths(
    args: &ConvertArgs,
    config_path: Option<PathBuf>,
) -> Result<ConverterConfig, SqlMetaError> {
    let cfg = read_config(config_path).map_err(SqlMetaError::config)?;
    Ok(cfg.with_overrides(args.input.clone(), args.output.clone()))
}

/// Convert the configured SQL file and write its YAML metadata.
pub fn handle_convert(
    args: &ConvertArgs,
    config_path: Option<PathBuf>,
) -> Result<ConversionSummary, SqlMetaError> {
    let cfg = resolve_paths(args, config_path)?;

    if !cfg.source.is_extension("sql") {
        warn!("{} does not look like a .sql file", cfg.source.display());
    }
    if !(cfg.destination.is_extension("yaml") || cfg.destination.is_extension("yml")) {
        warn!("{} does not look like a YAML file", cfg.destination.display());
    }

    info!(
        "converting {} -> {}",
        cfg.source.display(),
        cfg.destination.display()
    );
    convert_file(&cfg.source, &cfg.destination).map_err(SqlMetaError::convert)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::project::CONFIG_FILE_NAME;
    use std::fs;
    use test_utils::{write_sql_fixture, SAMPLE_DDL};

    #[test]
    fn test_convert_with_explicit_paths() {
        let (dir, sql_path) = write_sql_fixture("schema.sql", SAMPLE_DDL);
        let yaml_path = dir.path().join("schema.yaml");
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        let args = ConvertArgs {
            input: Some(sql_path),
            output: Some(yaml_path.clone()),
        };

        let summary = handle_convert(&args, Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(summary.tables, 2);
        let yaml = fs::read_to_string(&yaml_path).unwrap();
        assert!(yaml.starts_with("collections:\n  users:\n"));
    }

    #[test]
    fn test_convert_uses_config_file_paths() {
        let (dir, _) = write_sql_fixture("ddl.sql", "CREATE TABLE t (deviceid INT);");
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "source: ddl.sql\ndestination: meta.yaml\n",
        )
        .unwrap();
        let args = ConvertArgs {
            input: None,
            output: None,
        };

        let summary = handle_convert(&args, Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(summary.private_columns, 1);
        let yaml: serde_yaml::Value =
            serde_yaml::from_str(&fs::read_to_string(dir.path().join("meta.yaml")).unwrap())
                .unwrap();
        let column = &yaml["collections"]["t"]["columns"]["deviceid"];
        assert_eq!(column["type"].as_str(), Some("int"));
        assert_eq!(column["upper"].as_i64(), Some(100));
        assert_eq!(column["private_id"].as_bool(), Some(true));
    }

    #[test]
    fn test_convert_accepts_unusual_extensions() {
        let (dir, sql_path) = write_sql_fixture("schema.txt", "CREATE TABLE t (n FLOAT);");
        let out_path = dir.path().join("schema.out");
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        let args = ConvertArgs {
            input: Some(sql_path),
            output: Some(out_path.clone()),
        };

        let summary = handle_convert(&args, Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(summary.columns, 1);
        assert_eq!(
            fs::read_to_string(&out_path).unwrap(),
            "collections:\n  t:\n    columns:\n      n:\n        type: float\n        lower: 0\n        upper: 100\n"
        );
    }

    #[test]
    fn test_convert_missing_source_is_convert_error() {
        let (dir, _) = write_sql_fixture("unused.sql", "");
        fs::write(dir.path().join(CONFIG_FILE_NAME), "source: absent.sql\n").unwrap();
        let args = ConvertArgs {
            input: None,
            output: Some(dir.path().join("out.yaml")),
        };

        let err = handle_convert(&args, Some(dir.path().to_path_buf())).unwrap_err();

        assert!(matches!(err, SqlMetaError::Convert { .. }));
        assert!(err.to_string().contains("absent.sql"));
    }

    #[test]
    fn test_convert_missing_config_dir_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = ConvertArgs {
            input: None,
            output: None,
        };

        let err = handle_convert(&args, Some(dir.path().join("nowhere"))).unwrap_err();

        assert!(matches!(err, SqlMetaError::Config { .. }));
    }
}

use crate::config::error::ConfigError;
use crate::config::project::{ConverterConfig, ProjectConfig, CONFIG_FILE_NAME};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Load `sqlmeta.yml` from `config_dir`, or from the working directory when
/// no directory is given.
///
/// A missing file in the working directory falls back to the defaults. A
/// missing file in an explicitly requested directory is an error.
pub fn read_config(config_dir: Option<PathBuf>) -> Result<ConverterConfig, ConfigError> {
    let (config_file, required) = match config_dir {
        Some(dir) => (dir.join(CONFIG_FILE_NAME), true),
        None => (PathBuf::from(CONFIG_FILE_NAME), false),
    };

    if !config_file.exists() {
        if required {
            return Err(ConfigError::missing_file(&config_file));
        }
        debug!("no {} found, using defaults", CONFIG_FILE_NAME);
        return Ok(ConverterConfig::default());
    }

    debug!("loading config from {}", config_file.display());
    let project = load_project_config(&config_file)?;
    let config_root = config_file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    Ok(ConverterConfig::resolve(project, &config_root))
}

fn load_project_config(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }
    let project: ProjectConfig = serde_yaml::from_str(&raw)?;
    Ok(project)
}

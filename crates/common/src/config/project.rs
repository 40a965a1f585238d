use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "sqlmeta.yml";
pub const DEFAULT_SOURCE: &str = "homecreditdefaultrisk_previous_application.sql";
pub const DEFAULT_DESTINATION: &str = "output.yaml";

/// Contents of `sqlmeta.yml`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
}

/// Paths for a single conversion after defaults and the config location
/// have been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConverterConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination: PathBuf::from(DEFAULT_DESTINATION),
        }
    }
}

impl ConverterConfig {
    pub fn resolve(project: ProjectConfig, config_root: &Path) -> Self {
        let defaults = ConverterConfig::default();
        Self {
            source: resolve_path(config_root, &project.source.unwrap_or(defaults.source)),
            destination: resolve_path(
                config_root,
                &project.destination.unwrap_or(defaults.destination),
            ),
        }
    }

    /// Command line values win over whatever the config file said.
    pub fn with_overrides(mut self, source: Option<PathBuf>, destination: Option<PathBuf>) -> Self {
        if let Some(source) = source {
            self.source = source;
        }
        if let Some(destination) = destination {
            self.destination = destination;
        }
        self
    }
}

pub(crate) fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || root.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

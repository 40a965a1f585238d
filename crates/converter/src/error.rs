use common::diag;
use common::error::diagnostics::DiagnosticMessage;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {context}")]
    Io {
        context: DiagnosticMessage,
        #[source]
        source: io::Error,
    },
    #[error("malformed column definition: {context}")]
    MalformedColumn { context: DiagnosticMessage },
    #[error("serde yaml error: {context}")]
    SerdeYaml {
        context: DiagnosticMessage,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid pattern: {context}")]
    Pattern {
        context: DiagnosticMessage,
        #[source]
        source: regex::Error,
    },
}

impl ConvertError {
    #[track_caller]
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            context: DiagnosticMessage::new(format!(
                "failed to read '{}': {source}",
                path.as_ref().display()
            )),
            source,
        }
    }

    #[track_caller]
    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            context: DiagnosticMessage::new(format!(
                "failed to write '{}': {source}",
                path.as_ref().display()
            )),
            source,
        }
    }

    #[track_caller]
    pub fn malformed_column(table: &str, fragment: &str) -> Self {
        Self::MalformedColumn {
            context: diag!(
                "table '{}' has a column without a type: '{}'",
                table,
                fragment
            ),
        }
    }
}

impl From<serde_yaml::Error> for ConvertError {
    #[track_caller]
    fn from(err: serde_yaml::Error) -> Self {
        ConvertError::SerdeYaml {
            context: DiagnosticMessage::new(err.to_string()),
            source: err,
        }
    }
}

impl From<regex::Error> for ConvertError {
    #[track_caller]
    fn from(err: regex::Error) -> Self {
        ConvertError::Pattern {
            context: DiagnosticMessage::new(err.to_string()),
            source: err,
        }
    }
}

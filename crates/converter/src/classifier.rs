use crate::metadata::ColumnInfo;
use serde::Serialize;
use std::fmt;

/// Placeholder bounds attached to every numeric column. They are not read
/// from the DDL.
pub const MOCK_LOWER_BOUND: i64 = 0;
pub const MOCK_UPPER_BOUND: i64 = 100;

/// Column name (compared case-insensitively) that marks a private identifier.
pub const PRIVATE_ID_COLUMN: &str = "deviceid";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    Int,
    String,
    Float,
    Boolean,
    Datetime,
}

/// Checked top to bottom, first hit wins. `BIGINT` and `POINT` both land on
/// `int` because of this ordering.
const TYPE_RULES: &[(&[&str], SemanticType)] = &[
    (&["INT"], SemanticType::Int),
    (&["CHAR", "TEXT"], SemanticType::String),
    (&["FLOAT", "DOUBLE"], SemanticType::Float),
    (&["BOOLEAN"], SemanticType::Boolean),
    (&["DATE", "TIME"], SemanticType::Datetime),
];

impl SemanticType {
    /// Classify a raw SQL type by substring match on its uppercased form.
    pub fn classify(sql_type: &str) -> Option<SemanticType> {
        let upper = sql_type.to_uppercase();
        TYPE_RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|n| upper.contains(n)))
            .map(|(_, semantic)| *semantic)
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, SemanticType::Int | SemanticType::Float)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SemanticType::Int => "int",
            SemanticType::String => "string",
            SemanticType::Float => "float",
            SemanticType::Boolean => "boolean",
            SemanticType::Datetime => "datetime",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_private_id(column_name: &str) -> bool {
    column_name.to_lowercase() == PRIVATE_ID_COLUMN
}

/// Build the metadata entry for one column from its name and raw SQL type.
pub fn classify_column(column_name: &str, sql_type: &str) -> ColumnInfo {
    let semantic_type = SemanticType::classify(sql_type);
    let numeric = semantic_type.is_some_and(SemanticType::is_numeric);

    ColumnInfo {
        semantic_type,
        lower: numeric.then_some(MOCK_LOWER_BOUND),
        upper: numeric.then_some(MOCK_UPPER_BOUND),
        private_id: is_private_id(column_name).then_some(true),
    }
}

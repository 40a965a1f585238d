use crate::classifier::SemanticType;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// String-keyed map that serializes its entries in insertion order.
///
/// Inserting an existing key replaces the value but keeps the key's
/// original position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous value when `key` was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Root of the emitted document.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Metadata {
    pub collections: OrderedMap<TableMetadata>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct TableMetadata {
    pub columns: OrderedMap<ColumnInfo>,
}

/// `type` is always written, as `null` when the SQL type was not
/// recognised. The remaining keys only appear when they apply.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ColumnInfo {
    #[serde(rename = "type")]
    pub semantic_type: Option<SemanticType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_id: Option<bool>,
}

impl ColumnInfo {
    pub fn is_private(&self) -> bool {
        self.private_id == Some(true)
    }
}

/// Counts reported after a conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub tables: usize,
    pub columns: usize,
    pub private_columns: usize,
    pub untyped_columns: usize,
}

impl Metadata {
    pub fn summary(&self) -> ConversionSummary {
        let mut summary = ConversionSummary {
            tables: self.collections.len(),
            ..ConversionSummary::default()
        };
        for column in self.collections.values().flat_map(|t| t.columns.values()) {
            summary.columns += 1;
            if column.is_private() {
                summary.private_columns += 1;
            }
            if column.semantic_type.is_none() {
                summary.untyped_columns += 1;
            }
        }
        summary
    }
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} table(s), {} column(s), {} private, {} untyped",
            self.tables, self.columns, self.private_columns, self.untyped_columns
        )
    }
}

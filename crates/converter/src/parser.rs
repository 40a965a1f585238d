//! Regex-driven extraction of `CREATE TABLE` statements.
//!
//! This is pattern matching, not a SQL parser. The body capture stops at the
//! first `);` and is split on every comma, so a type with arguments such as
//! `DECIMAL(10,2)` is cut in two.

use crate::error::ConvertError;
use regex::Regex;

/// Case-sensitive keyword, one table name of word characters, non-greedy body
/// that may span lines.
pub const CREATE_TABLE_PATTERN: &str = r"(?s)CREATE TABLE (\w+) \((.*?)\);";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDefinition<'a> {
    pub name: &'a str,
    pub body: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDefinition<'a> {
    pub name: &'a str,
    pub sql_type: &'a str,
}

pub struct TableExtractor {
    pattern: Regex,
}

impl TableExtractor {
    pub fn new() -> Result<Self, ConvertError> {
        Ok(Self {
            pattern: Regex::new(CREATE_TABLE_PATTERN)?,
        })
    }

    /// Every `CREATE TABLE` statement in source order.
    pub fn tables<'a>(&self, sql: &'a str) -> Vec<TableDefinition<'a>> {
        self.pattern
            .captures_iter(sql)
            .filter_map(|caps| {
                Some(TableDefinition {
                    name: caps.get(1)?.as_str(),
                    body: caps.get(2)?.as_str(),
                })
            })
            .collect()
    }
}

impl<'a> TableDefinition<'a> {
    /// Split the body on commas into `<name> <type> ...` fragments.
    ///
    /// Tokens after the type (constraints, `NOT NULL`, ...) are ignored. A
    /// fragment with fewer than two tokens fails the whole table.
    pub fn columns(&self) -> Result<Vec<ColumnDefinition<'a>>, ConvertError> {
        self.body
            .split(',')
            .map(|fragment| {
                let fragment = fragment.trim();
                let mut tokens = fragment.split_whitespace();
                match (tokens.next(), tokens.next()) {
                    (Some(name), Some(sql_type)) => Ok(ColumnDefinition { name, sql_type }),
                    _ => Err(ConvertError::malformed_column(self.name, fragment)),
                }
            })
            .collect()
    }
}

use std::fmt;

use indexmap::IndexSet;
use serde::Deserialize;

use crate::utils::escape_value;

/// One statement emitted by the DDL parser. Only `CREATE TABLE` statements carry anything we can
/// generate a model from.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawStatement {
    CreateTable(RawTable),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTable {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub columns: Vec<RawTableEntry>,
    #[serde(default)]
    pub options: Vec<RawOption>,
}

/// The parser lists columns and key declarations side by side within a table body.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawTableEntry {
    Column(RawColumn),
    PrimaryKey(PrimaryKeyDecl),
    /// Unique and index keys land here. They are not part of a generated model.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawColumn {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data_type: RawDataType,
    #[serde(default)]
    pub allow_null: bool,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default)]
    pub default_value: Option<Literal>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDataType {
    /// Canonical SQL keyword, e.g. `VARCHAR`.
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(default)]
    pub params: Vec<Literal>,
    #[serde(default)]
    pub unsigned: bool,
    #[serde(default)]
    pub zerofill: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrimaryKeyDecl {
    #[serde(default)]
    pub fields: IndexSet<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawOption {
    pub key: String,
    #[serde(default)]
    pub value: Option<Literal>,
}

/// A scalar value as written in the DDL: type parameters, column defaults and option values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Number(serde_json::Number),
    Text(String),
}

impl Literal {
    /// The value with its first quote escaped, but not quoted.
    pub fn escaped(&self) -> String {
        match self {
            Literal::Number(n) => n.to_string(),
            Literal::Text(s) => escape_value(s),
        }
    }

    /// Renders the value as a JS literal. Text is single-quoted.
    pub fn to_js(&self) -> String {
        match self {
            Literal::Number(n) => n.to_string(),
            Literal::Text(s) => format!("'{}'", escape_value(s)),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Text(s.to_owned())
    }
}

impl From<u64> for Literal {
    fn from(n: u64) -> Self {
        Literal::Number(n.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_entries_are_kept_as_other() {
        let json = r#"[
            {"type": "create_table", "name": "t", "columns": [
                {"type": "unique_key", "fields": ["a"]},
                {"type": "index_key", "fields": ["b"]}
            ]},
            {"type": "drop_table", "name": "t"}
        ]"#;
        let statements: Vec<RawStatement> = serde_json::from_str(json).unwrap();
        assert_eq!(statements.len(), 2);
        let RawStatement::CreateTable(table) = &statements[0] else {
            panic!("expected a table");
        };
        assert!(table
            .columns
            .iter()
            .all(|c| matches!(c, RawTableEntry::Other)));
        assert!(matches!(statements[1], RawStatement::Other));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let json = r#"{"type": "column", "name": "a", "data_type": {"type": "JSON"}}"#;
        let entry = serde_json::from_str::<RawTableEntry>(json).unwrap();
        let RawTableEntry::Column(column) = entry else {
            panic!("expected a column");
        };
        assert_eq!(column.data_type.type_name, "JSON");
        assert!(column.data_type.params.is_empty());
        assert!(!column.allow_null);
        assert!(!column.auto_increment);
        assert_eq!(column.default_value, None);
        assert_eq!(column.comment, None);
    }

    #[test]
    fn test_option_values_may_be_missing_or_null() {
        let json = r#"{"type": "create_table", "name": "t", "options": [
            {"key": "ENGINE"},
            {"key": "ROW_FORMAT", "value": null},
            {"key": "AUTO_INCREMENT", "value": 5}
        ]}"#;
        let statement = serde_json::from_str::<RawStatement>(json).unwrap();
        let RawStatement::CreateTable(table) = statement else {
            panic!("expected a table");
        };
        assert_eq!(table.options[0].value, None);
        assert_eq!(table.options[1].value, None);
        assert_eq!(table.options[2].value, Some(Literal::from(5u64)));
    }

    #[test]
    fn test_literals() {
        let params: Vec<Literal> = serde_json::from_str(r#"[10, 2.5, "it's"]"#).unwrap();
        assert_eq!(params[0], Literal::from(10u64));
        assert_eq!(params[0].to_js(), "10");
        assert_eq!(params[1].to_string(), "2.5");
        assert_eq!(params[2].to_string(), "it's");
        assert_eq!(params[2].to_js(), r"'it\'s'");
        assert_eq!(params[2].escaped(), r"it\'s");
        assert_eq!(params[0].escaped(), "10");
    }
}

use indexmap::IndexSet;

use crate::types::{DataType, JsType};

use super::raw_schema::Literal;

/// A table ready to be rendered as a model file.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
    pub table_name: String,
    /// Singular form of the table name. Identifies the generated file.
    pub file_base_name: String,
    /// In column order.
    pub fields: Vec<FieldDescriptor>,
    pub table_comment: Option<String>,
    /// Root symbols of every field type, in order of first use.
    pub required_type_symbols: IndexSet<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub data_type: DataType,
    pub is_primary_key: bool,
    pub allow_null: bool,
    pub auto_increment: bool,
    pub default_value: Option<Literal>,
    pub comment: Option<String>,
    pub js_type: JsType,
}

impl FieldDescriptor {
    pub fn type_expression(&self) -> String {
        self.data_type.to_string()
    }

    /// The default as it appears in the generated definition.
    pub fn default_value_literal(&self) -> Option<String> {
        self.default_value.as_ref().map(Literal::to_js)
    }
}

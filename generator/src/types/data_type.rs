use std::fmt;

use itertools::Itertools;
use strum::{Display, EnumString, IntoStaticStr};

/// The SQL column types understood by the generator, spelled as the parser's canonical keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SqlType {
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Decimal,
    Float,
    Double,
    Bit,
    Date,
    DateTime,
    Timestamp,
    Time,
    Year,
    Char,
    VarChar,
    Binary,
    VarBinary,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    TinyText,
    Text,
    MediumText,
    LongText,
    Json,
    Enum,
    Set,
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl SqlType {
    pub fn keyword(self) -> &'static str {
        self.into()
    }

    /// The JS type a value of this column has once loaded by Sequelize.
    pub fn js_type(self) -> JsType {
        match self {
            SqlType::TinyInt
            | SqlType::SmallInt
            | SqlType::MediumInt
            | SqlType::Int
            | SqlType::BigInt
            | SqlType::Decimal
            | SqlType::Float
            | SqlType::Double
            | SqlType::Year => JsType::Number,
            _ => JsType::String,
        }
    }
}

/// The JS type of a column given its SQL keyword. Anything that is not numeric is a string.
pub fn js_type(type_name: &str) -> JsType {
    type_name
        .parse::<SqlType>()
        .map(SqlType::js_type)
        .unwrap_or(JsType::String)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum JsType {
    Number,
    String,
}

/// A Sequelize data type expression such as `INTEGER(11).UNSIGNED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataType {
    root: &'static str,
    args: Vec<String>,
    modifiers: Vec<&'static str>,
}

impl DataType {
    pub fn new(root: &'static str) -> Self {
        Self {
            root,
            args: vec![],
            modifiers: vec![],
        }
    }

    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.args.extend(args.into_iter().map(|a| a.to_string()));
        self
    }

    pub fn with_modifier(mut self, modifier: &'static str) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_modifier_if(self, condition: bool, modifier: &'static str) -> Self {
        if condition {
            self.with_modifier(modifier)
        } else {
            self
        }
    }

    /// The `app.Sequelize` member the expression starts with.
    pub fn root_symbol(&self) -> &'static str {
        self.root
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.root)?;
        if !self.args.is_empty() {
            write!(f, "({})", self.args.iter().join(","))?;
        }
        for modifier in &self.modifiers {
            write!(f, ".{modifier}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(SqlType::from_str("MEDIUMINT"), Ok(SqlType::MediumInt));
        assert_eq!(SqlType::from_str("GEOMETRYCOLLECTION"), Ok(SqlType::GeometryCollection));
        assert_eq!(SqlType::VarBinary.keyword(), "VARBINARY");
        assert_eq!(SqlType::LineString.to_string(), "LINESTRING");
        assert!(SqlType::from_str("varchar").is_err());
        assert!(SqlType::from_str("UUID").is_err());
    }

    #[test]
    fn test_js_type() {
        assert_eq!(SqlType::Year.js_type(), JsType::Number);
        assert_eq!(SqlType::Decimal.js_type(), JsType::Number);
        assert_eq!(SqlType::Bit.js_type(), JsType::String);
        assert_eq!(SqlType::DateTime.js_type(), JsType::String);
        assert_eq!(js_type("INT"), JsType::Number);
        assert_eq!(js_type("GEOMETRY"), JsType::String);
        assert_eq!(JsType::Number.to_string(), "number");
        assert_eq!(JsType::String.to_string(), "string");
    }

    #[test]
    fn test_display() {
        assert_eq!(DataType::new("JSON").to_string(), "JSON");
        assert_eq!(
            DataType::new("DECIMAL").with_args([10, 2]).to_string(),
            "DECIMAL(10,2)"
        );
        let data_type = DataType::new("INTEGER")
            .with_args(["11"])
            .with_modifier_if(true, "UNSIGNED")
            .with_modifier_if(false, "ZEROFILL");
        assert_eq!(data_type.to_string(), "INTEGER(11).UNSIGNED");
        assert_eq!(data_type.root_symbol(), "INTEGER");
    }
}

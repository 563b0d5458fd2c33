use std::str::FromStr;

use crate::{
    errors::TypeError,
    schema::raw_schema::{Literal, RawDataType},
};

use super::data_type::{DataType, SqlType};

/// Maps a parsed column type onto the Sequelize expression used to declare it.
pub fn map_type(raw: &RawDataType) -> Result<DataType, TypeError> {
    if raw.type_name.is_empty() {
        return Err(TypeError::EmptyType);
    }
    let sql_type =
        SqlType::from_str(&raw.type_name).map_err(|_| TypeError::UnsupportedType {
            type_name: raw.type_name.clone(),
        })?;
    let first_param = raw.params.first();

    let data_type = match sql_type {
        SqlType::TinyInt
        | SqlType::SmallInt
        | SqlType::MediumInt
        | SqlType::Int
        | SqlType::BigInt => {
            let root = match sql_type {
                SqlType::Int => "INTEGER",
                other => other.keyword(),
            };
            DataType::new(root)
                .with_args(first_param)
                .with_modifier_if(raw.unsigned, "UNSIGNED")
                .with_modifier_if(raw.zerofill, "ZEROFILL")
        }

        SqlType::Decimal | SqlType::Float | SqlType::Double | SqlType::Bit => {
            DataType::new(sql_type.keyword()).with_args(&raw.params)
        }

        // TIMESTAMP and YEAR have no exact Sequelize counterpart.
        SqlType::Date => DataType::new("DATEONLY").with_args(first_param),
        SqlType::DateTime | SqlType::Timestamp => DataType::new("DATE").with_args(first_param),
        SqlType::Time => DataType::new("TIME").with_args(first_param),
        SqlType::Year => DataType::new("SMALLINT").with_args(first_param),

        SqlType::VarChar => DataType::new("STRING").with_args(first_param),
        SqlType::Char => DataType::new("CHAR").with_args(first_param),
        SqlType::Binary => DataType::new("CHAR")
            .with_args(first_param)
            .with_modifier("BINARY"),
        SqlType::VarBinary => DataType::new("STRING")
            .with_args(first_param)
            .with_modifier("BINARY"),

        SqlType::TinyBlob => sized("BLOB", "tiny"),
        SqlType::Blob => DataType::new("BLOB").with_args(first_param),
        SqlType::MediumBlob => sized("BLOB", "medium"),
        SqlType::LongBlob => sized("BLOB", "long"),
        SqlType::TinyText => sized("TEXT", "tiny"),
        SqlType::Text => DataType::new("TEXT").with_args(first_param),
        SqlType::MediumText => sized("TEXT", "medium"),
        SqlType::LongText => sized("TEXT", "long"),

        SqlType::Json => DataType::new("JSON"),

        SqlType::Enum => {
            if raw.params.is_empty() {
                return Err(TypeError::MissingEnumValues);
            }
            DataType::new("ENUM").with_args(raw.params.iter().map(Literal::escaped))
        }

        SqlType::Set => {
            return Err(TypeError::UnsupportedType {
                type_name: raw.type_name.clone(),
            })
        }

        SqlType::Geometry => DataType::new("GEOMETRY"),
        SqlType::Point
        | SqlType::LineString
        | SqlType::Polygon
        | SqlType::MultiPoint
        | SqlType::MultiLineString
        | SqlType::MultiPolygon
        | SqlType::GeometryCollection => {
            DataType::new("GEOMETRY").with_args([format!("'{}'", sql_type.keyword())])
        }
    };
    Ok(data_type)
}

/// `BLOB('tiny')`, `TEXT('long')` and so on. Any length parameter is dropped.
fn sized(root: &'static str, size: &str) -> DataType {
    DataType::new(root).with_args([format!("'{size}'")])
}

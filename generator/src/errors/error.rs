use std::{io, path::PathBuf};

use thiserror::Error as ThisError;

/// Failure to map a column's SQL type onto a Sequelize data type.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum TypeError {
    #[error("data type is empty")]
    EmptyType,

    #[error("data type {type_name} is not supported")]
    UnsupportedType { type_name: String },

    #[error("data type ENUM must define values")]
    MissingEnumValues,
}

#[derive(Debug, ThisError)]
pub enum Error {
    /// The parser output could not be read as a list of statements.
    #[error("invalid schema input: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("table `{table}`, column `{column}`: {source}")]
    Column {
        table: String,
        column: String,
        #[source]
        source: TypeError,
    },

    #[error("unable to write `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn column(table: &str, column: &str, source: TypeError) -> Self {
        Error::Column {
            table: table.to_owned(),
            column: column.to_owned(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

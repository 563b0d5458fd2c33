mod errors;
mod generator;
mod inflector;
mod options;
mod schema;
mod tests;
mod types;
mod utils;
mod writer;

pub use errors::{Error, TypeError};
pub use generator::{assemble, parse_chunks, Generator, ModelFile, Render};
pub use inflector::{English, Inflector};
pub use options::{Options, DEFAULT_FILE_EXTENSION, DEFAULT_INDENT_WIDTH};
pub use schema::{
    FieldDescriptor, Literal, ModelDescriptor, PrimaryKeyDecl, RawColumn, RawDataType, RawOption,
    RawStatement, RawTable, RawTableEntry,
};
pub use types::{js_type, map_type, DataType, JsType, SqlType};
pub use utils::escape_value;
pub use writer::write_models;

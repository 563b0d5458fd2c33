pub mod model;
pub mod raw_schema;

pub use model::{FieldDescriptor, ModelDescriptor};
pub use raw_schema::{
    Literal, PrimaryKeyDecl, RawColumn, RawDataType, RawOption, RawStatement, RawTable,
    RawTableEntry,
};

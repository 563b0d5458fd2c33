mod data_type;
mod mapper;

pub use data_type::{js_type, DataType, JsType, SqlType};
pub use mapper::map_type;

use crate::inflector::{English, Inflector};

pub const DEFAULT_INDENT_WIDTH: usize = 4;
pub const DEFAULT_FILE_EXTENSION: &str = "js";

pub struct Options {
    pub inflector: Box<dyn Inflector>,
    /// Spaces per indentation level in generated files.
    pub indent_width: usize,
    pub file_extension: String,
}

impl Options {
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }

    pub fn file_name(&self, base_name: &str) -> String {
        format!("{}.{}", base_name, self.file_extension)
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            inflector: Box::new(English()),
            indent_width: DEFAULT_INDENT_WIDTH,
            file_extension: DEFAULT_FILE_EXTENSION.to_owned(),
        }
    }
}

use log::debug;
use serde::Serialize;

use crate::{
    errors::Error,
    schema::{ModelDescriptor, RawStatement},
    Options,
};

use super::{assembler::assemble, rendering::Render};

/// A rendered model and the name of the file it belongs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelFile {
    pub file_name: String,
    pub content: String,
}

pub struct Generator {
    options: Options,
}

impl Generator {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Generates the model files for one chunk of parser output.
    pub fn generate(&self, schema_json: &str) -> Result<Vec<ModelFile>, Error> {
        let statements = serde_json::from_str::<Vec<RawStatement>>(schema_json)?;
        self.generate_statements(&statements)
    }

    /// Assembles and renders every table before returning, so that a bad column anywhere in the
    /// chunk leaves nothing to write.
    pub fn generate_statements(
        &self,
        statements: &[RawStatement],
    ) -> Result<Vec<ModelFile>, Error> {
        let models = self.assemble(statements)?;
        Ok(models.iter().map(|model| self.render(model)).collect())
    }

    /// Stops at the first table holding a column whose type cannot be mapped.
    pub fn assemble(&self, statements: &[RawStatement]) -> Result<Vec<ModelDescriptor>, Error> {
        let mut models = vec![];
        for statement in statements {
            let RawStatement::CreateTable(table) = statement else {
                debug!("Ignoring a statement which does not create a table");
                continue;
            };
            if let Some(model) = assemble(table, self.options.inflector.as_ref())? {
                models.push(model);
            }
        }
        Ok(models)
    }

    pub fn render(&self, model: &ModelDescriptor) -> ModelFile {
        ModelFile {
            file_name: self.options.file_name(&model.file_base_name),
            content: model.render(&self.options),
        }
    }
}

/// Splits input holding several JSON documents back to back. Each document is one chunk of parser
/// output.
pub fn parse_chunks(input: &str) -> impl Iterator<Item = Result<Vec<RawStatement>, Error>> + '_ {
    serde_json::Deserializer::from_str(input)
        .into_iter::<Vec<RawStatement>>()
        .map(|chunk| chunk.map_err(Error::from))
}

#[cfg(test)]
mod tests {
    use crate::{inflector::Inflector, utils::get_test_resource};

    use super::*;

    #[test]
    fn test_generate() {
        let generator = Generator::new(Options::default());
        let files = generator
            .generate(&get_test_resource("blog_schema.json"))
            .unwrap();
        let file_names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(file_names, vec!["user.js", "post.js"]);
        assert!(files[0]
            .content
            .contains("const { INTEGER, STRING, ENUM, DATE } = app.Sequelize;"));
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let generator = Generator::new(Options::default());
        assert!(matches!(
            generator.generate("[{\"type\": \"create_table\""),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            generator.generate("{\"type\": \"create_table\"}"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_valueless_options_are_ignored() {
        let json = r#"[{"type": "create_table", "name": "users",
            "columns": [{"type": "column", "name": "id", "data_type": {"type": "INT"}}],
            "options": [{"key": "ENGINE"}, {"key": "ROW_FORMAT", "value": null}]
        }]"#;
        let files = Generator::new(Options::default()).generate(json).unwrap();
        assert_eq!(files.len(), 1);
        assert!(!files[0].content.contains("comment:"));
    }

    #[test]
    fn test_custom_options() {
        struct Verbatim();
        impl Inflector for Verbatim {
            fn singular(&self, word: &str) -> String {
                word.to_owned()
            }
        }
        let generator = Generator::new(Options {
            inflector: Box::new(Verbatim()),
            file_extension: "ts".to_string(),
            ..Default::default()
        });
        let files = generator
            .generate(&get_test_resource("blog_schema.json"))
            .unwrap();
        assert_eq!(files[0].file_name, "users.ts");
    }

    #[test]
    fn test_parse_chunks() {
        let input = r#"
            [{"type": "create_table", "name": "users", "columns": []}]

            [{"type": "create_table", "name": "posts", "columns": []}]
        "#;
        let chunks: Vec<_> = parse_chunks(input).collect::<Result<_, _>>().unwrap();
        assert_eq!(chunks.len(), 2);

        let mut chunks = parse_chunks("[] [oops]");
        assert!(chunks.next().unwrap().is_ok());
        assert!(chunks.next().unwrap().is_err());
    }
}

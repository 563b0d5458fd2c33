use itertools::Itertools;

use crate::{
    schema::{FieldDescriptor, ModelDescriptor},
    utils::escape_value,
    Options,
};

use super::constants::TYPEDEF_SUFFIX;

pub trait Render {
    fn render(&self, options: &Options) -> String;
}

impl Render for ModelDescriptor {
    fn render(&self, options: &Options) -> String {
        let unit = options.indent_unit();
        let symbols = self.required_type_symbols.iter().join(", ");

        let define_args = [
            format!("{},", quote(&self.table_name)),
            self.fields.render(options),
            self.table_options(options),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .join("\n");
        let body = [
            format!("const {{ {symbols} }} = app.Sequelize;"),
            "const { model } = app;".to_string(),
            "return model.define(".to_string(),
            indent(&define_args, &unit),
            ");".to_string(),
        ]
        .join("\n");

        [
            "/**".to_string(),
            " * @param { Egg.Application } app egg app".to_string(),
            " */".to_string(),
            "module.exports = function(app) {".to_string(),
            indent(&body, &unit),
            "};".to_string(),
            String::new(),
            self.typedef(),
            String::new(),
        ]
        .join("\n")
    }
}

impl ModelDescriptor {
    fn table_options(&self, options: &Options) -> String {
        match &self.table_comment {
            Some(comment) => {
                let unit = options.indent_unit();
                let comment = indent(&format!("comment: {},", quote(comment)), &unit);
                format!("{{\n{comment}\n}},")
            }
            None => String::new(),
        }
    }

    fn typedef(&self) -> String {
        let properties = self.fields.iter().map(|field| {
            let property = format!(" * @property {{ {} }} {}", field.js_type, field.name);
            match &field.comment {
                Some(comment) => format!("{property} {comment}"),
                None => property,
            }
        });
        let header = format!(
            " * @typedef {{ Object }} {}{}",
            self.table_name.to_uppercase(),
            TYPEDEF_SUFFIX
        );
        ["/**".to_string(), header]
            .into_iter()
            .chain(properties)
            .chain([" */".to_string()])
            .join("\n")
    }
}

impl Render for Vec<FieldDescriptor> {
    fn render(&self, options: &Options) -> String {
        let fields = self.iter().map(|f| f.render(options)).join("\n");
        format!("{{\n{}\n}},", indent(&fields, &options.indent_unit()))
    }
}

impl Render for FieldDescriptor {
    fn render(&self, options: &Options) -> String {
        let mut attributes = vec![format!("type: {},", self.data_type)];
        if self.is_primary_key {
            attributes.push("primaryKey: true,".to_string());
        }
        if self.auto_increment {
            attributes.push("autoIncrement: true,".to_string());
        }
        if !self.allow_null {
            attributes.push("allowNull: false,".to_string());
        }
        if let Some(default_value) = self.default_value_literal() {
            attributes.push(format!("defaultValue: {default_value},"));
        }
        if let Some(comment) = &self.comment {
            attributes.push(format!("comment: {},", quote(comment)));
        }
        let attributes = indent(&attributes.join("\n"), &options.indent_unit());
        format!("{}: {{\n{attributes}\n}},", self.name)
    }
}

/// Line breaks are escaped so the literal stays on one line and `indent` leaves its text alone.
fn quote(s: &str) -> String {
    let escaped = escape_value(s).replace('\r', "\\r").replace('\n', "\\n");
    format!("'{escaped}'")
}

fn indent(s: &str, unit: &str) -> String {
    s.lines().map(|line| format!("{unit}{line}")).join("\n")
}

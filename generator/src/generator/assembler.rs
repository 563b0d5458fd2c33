use indexmap::IndexSet;
use log::debug;

use crate::{
    errors::{Error, TypeError},
    inflector::Inflector,
    schema::{FieldDescriptor, ModelDescriptor, RawColumn, RawTable, RawTableEntry},
    types::{js_type, map_type},
};

use super::constants::COMMENT_OPTION_KEY;

/// Builds the model for one table. Tables without a name or without any named column produce no
/// model.
pub fn assemble(
    table: &RawTable,
    inflector: &dyn Inflector,
) -> Result<Option<ModelDescriptor>, Error> {
    if table.name.is_empty() {
        debug!("Skipping a table without a name");
        return Ok(None);
    }

    let mut columns: Vec<&RawColumn> = vec![];
    let mut primary_keys = vec![];
    for entry in &table.columns {
        match entry {
            RawTableEntry::Column(column) => columns.push(column),
            RawTableEntry::PrimaryKey(primary_key) => primary_keys.push(primary_key),
            RawTableEntry::Other => {}
        }
    }
    // Only the first primary key declaration counts.
    let primary_fields = primary_keys.first().map(|pk| &pk.fields);

    let fields = columns
        .into_iter()
        .filter(|column| !column.name.is_empty())
        .map(|column| {
            let is_primary_key = primary_fields.is_some_and(|f| f.contains(&column.name));
            make_field(column, is_primary_key)
                .map_err(|source| Error::column(&table.name, &column.name, source))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if fields.is_empty() {
        debug!("Skipping table `{}` which has no columns", table.name);
        return Ok(None);
    }

    let table_comment = table
        .options
        .iter()
        .filter(|option| option.key == COMMENT_OPTION_KEY)
        .find_map(|option| option.value.as_ref())
        .map(|value| value.to_string());

    let required_type_symbols: IndexSet<&'static str> = fields
        .iter()
        .map(|field| field.data_type.root_symbol())
        .collect();

    Ok(Some(ModelDescriptor {
        table_name: table.name.clone(),
        file_base_name: inflector.singular(&table.name),
        fields,
        table_comment,
        required_type_symbols,
    }))
}

fn make_field(
    column: &RawColumn,
    is_primary_key: bool,
) -> Result<FieldDescriptor, TypeError> {
    let data_type = map_type(&column.data_type)?;
    debug!("Column `{}` maps to {}", column.name, data_type);
    Ok(FieldDescriptor {
        name: column.name.clone(),
        data_type,
        is_primary_key,
        allow_null: column.allow_null,
        auto_increment: column.auto_increment,
        default_value: column.default_value.clone(),
        comment: column.comment.clone().filter(|c| !c.is_empty()),
        js_type: js_type(&column.data_type.type_name),
    })
}

use brine_rowmap_schema::{capitalize, ReaderTypeSpec, ResolvedType, TypeRegistry, READER_TYPES};
use tracing::{debug, warn};

use crate::{
    error::RowMapError,
    naming::column_token,
    parser::parse_fields,
    types::{ColumnNameSpec, Field, ReaderToObjectRequest},
};

/// Generates the statements that copy one `ResultSet` row into an object.
///
/// Without a naming policy every accessor gets an empty column literal.
pub fn generate_reader_to_object_code(
    request: &ReaderToObjectRequest,
    naming: Option<&ColumnNameSpec>,
) -> Result<String, RowMapError> {
    let fields = parse_fields(&request.fields_text)?;
    let default_naming = ColumnNameSpec::default();
    let naming = naming.unwrap_or(&default_naming);

    let lines = emit_reader_lines(request, &fields, &READER_TYPES, naming, true);
    Ok(lines.join("\n"))
}

/// One or two lines per field, in field order. Fields of unregistered types
/// are skipped unless `handle_unknown` is set.
pub fn emit_reader_lines(
    request: &ReaderToObjectRequest,
    fields: &[Field],
    registry: &TypeRegistry<ReaderTypeSpec>,
    naming: &ColumnNameSpec,
    handle_unknown: bool,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(fields.len());

    for field in fields {
        match registry.resolve(&field.declared_type, handle_unknown) {
            Some(ResolvedType::Known(spec)) => {
                let column = column_token(&field.identifier, naming);
                let mut read = format!("{}.{}", request.reader_id, reader_accessor(spec, &column));
                if let Some(convert) = spec.converter {
                    read = convert(&read);
                }
                let setter = object_setter(field, spec.setter_suffix);
                debug!(field = %field.identifier, %column, "emitting row read");
                lines.push(format!("{}.{}({});", request.object_id, setter, read));
            }
            Some(ResolvedType::Unknown { name }) => {
                warn!(field = %field.identifier, type_name = name, "unknown type, object must be built by hand");
                lines.push(format!("//{} {};", name, field.identifier));
                lines.push(format!(
                    "//{}.{}({});",
                    request.object_id,
                    object_setter(field, None),
                    field.identifier
                ));
            }
            None => {}
        }
    }

    lines
}

fn reader_accessor(spec: &ReaderTypeSpec, column: &str) -> String {
    match spec.accessor_template {
        Some(template) => template(column),
        None => {
            let suffix = spec.accessor_suffix.unwrap_or(spec.name);
            format!("get{}({})", capitalize(suffix), column)
        }
    }
}

fn object_setter(field: &Field, suffix: Option<&str>) -> String {
    format!("set{}", capitalize(suffix.unwrap_or(field.identifier.as_str())))
}

use brine_rowmap_schema::{capitalize, ResolvedType, TypeRegistry, WriterTypeSpec, WRITER_TYPES};
use tracing::{debug, warn};

use crate::{
    error::RowMapError,
    parser::parse_fields,
    types::{Field, ObjectToWriterRequest},
};

/// Method the fallback calls on values of unregistered types.
pub const UNKNOWN_TYPE_TO_STRING: &str = "toString";

/// Generates the statements that bind an object's fields as statement parameters.
pub fn generate_object_to_writer_code(request: &ObjectToWriterRequest) -> Result<String, RowMapError> {
    let fields = parse_fields(&request.fields_text)?;
    let lines = emit_writer_lines(request, &fields, &WRITER_TYPES, true);
    Ok(lines.join("\n"))
}

/// One line per field, preceded by the counter declaration when a counter is set.
pub fn emit_writer_lines(
    request: &ObjectToWriterRequest,
    fields: &[Field],
    registry: &TypeRegistry<WriterTypeSpec>,
    handle_unknown: bool,
) -> Vec<String> {
    let counter = request.counter();
    let mut lines = Vec::with_capacity(fields.len() + 1);

    if let Some(counter) = counter {
        lines.push(format!("int {} = 1;", counter));
    }

    let resolved = fields
        .iter()
        .filter_map(|field| Some((field, registry.resolve(&field.declared_type, handle_unknown)?)));

    for (position, (field, resolved)) in resolved.enumerate() {
        let index = match counter {
            Some(counter) => format!("{}++", counter),
            None => (position + 1).to_string(),
        };

        let (setter, value) = match resolved {
            ResolvedType::Known(spec) => {
                let getter = object_getter(field, spec.getter_prefix, spec.getter_suffix);
                let mut value = format!("{}.{}()", request.object_id, getter);
                if let Some(convert) = spec.converter {
                    value = convert(&value);
                }
                let suffix = spec.accessor_suffix.unwrap_or(spec.name);
                (format!("set{}", capitalize(suffix)), value)
            }
            ResolvedType::Unknown { name } => {
                warn!(field = %field.identifier, type_name = name, "unknown type, binding its string form");
                let read = format!("{}.{}()", request.object_id, object_getter(field, None, None));
                let value = format!("({read} == null ? null : {read}.{}())", UNKNOWN_TYPE_TO_STRING);
                ("setString".to_string(), value)
            }
        };

        debug!(field = %field.identifier, %index, "emitting parameter bind");
        lines.push(format!("{}.{}({}, {});", request.writer_id, setter, index, value));
    }

    lines
}

fn object_getter(field: &Field, prefix: Option<&str>, suffix: Option<&str>) -> String {
    let prefix = prefix.unwrap_or("get");
    let suffix = suffix.unwrap_or(field.identifier.as_str());
    format!("{}{}", prefix, capitalize(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(fields_text: &str, counter_id: Option<&str>) -> ObjectToWriterRequest {
        ObjectToWriterRequest {
            writer_id:   "ps".to_string(),
            object_id:   "obj".to_string(),
            fields_text: fields_text.to_string(),
            counter_id:  counter_id.map(str::to_string),
        }
    }

    #[test]
    fn test_sample_fields_positional() {
        let code = generate_object_to_writer_code(&request(
            "private boolean valid; private long id; private String name;",
            None,
        ))
        .unwrap();
        assert_eq!(
            code,
            "ps.setString(1, Boolean.toString(obj.isValid()));\n\
             ps.setLong(2, obj.getId());\n\
             ps.setString(3, obj.getName());"
        );
    }

    #[test]
    fn test_counter_uses_post_increment() {
        let code = generate_object_to_writer_code(&request("private int a; private Long b;", Some("idx"))).unwrap();
        let lines: Vec<_> = code.lines().collect();
        assert_eq!(lines, vec!["int idx = 1;", "ps.setInt(idx++, obj.getA());", "ps.setObject(idx++, obj.getB());"]);
    }

    #[test]
    fn test_blank_counter_is_ignored() {
        let code = generate_object_to_writer_code(&request("private int a;", Some("  "))).unwrap();
        assert_eq!(code, "ps.setInt(1, obj.getA());");
    }

    #[test]
    fn test_unknown_type_binds_string_form() {
        let code = generate_object_to_writer_code(&request("private Address home; private Date born;", None)).unwrap();
        let lines: Vec<_> = code.lines().collect();
        assert_eq!(lines[0], "ps.setString(1, (obj.getHome() == null ? null : obj.getHome().toString()));");
        assert_eq!(lines[1], "ps.setDate(2, new java.sql.Date(obj.getBorn().getTime()));");
    }

    #[test]
    fn test_positions_skip_static_fields() {
        let code = generate_object_to_writer_code(&request(
            "private static final long serialVersionUID; private int a; private transient int b; private int c;",
            None,
        ))
        .unwrap();
        assert_eq!(code, "ps.setInt(1, obj.getA());\nps.setInt(2, obj.getC());");
    }

    #[test]
    fn test_getter_suffix_override() {
        let fields = parse_fields("private boolean active;").unwrap();
        let registry = TypeRegistry::new(vec![WriterTypeSpec {
            name:            "boolean",
            converter:       None,
            getter_prefix:   Some("has"),
            getter_suffix:   Some("flag"),
            accessor_suffix: None,
        }])
        .unwrap();
        let lines = emit_writer_lines(&request("", None), &fields, &registry, false);
        assert_eq!(lines, vec!["ps.setBoolean(1, obj.hasFlag());"]);
    }
}

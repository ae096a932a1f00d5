//! `PreparedStatement` side of the mapping: how each Java type is bound as a parameter.

use crate::registry::{Converter, TypeRegistry, TypeSpec};
use lazy_static::lazy_static;

#[derive(Debug, Clone, Default)]
pub struct WriterTypeSpec {
    pub name:            &'static str,
    pub converter:       Option<Converter>,
    /// Object getter prefix; `get` when absent.
    pub getter_prefix:   Option<&'static str>,
    /// Replaces the field identifier in the object getter.
    pub getter_suffix:   Option<&'static str>,
    /// Replaces the type name in the generated `ps.set…` call.
    pub accessor_suffix: Option<&'static str>,
}

impl WriterTypeSpec {
    const fn plain(name: &'static str) -> Self {
        WriterTypeSpec {
            name,
            converter:       None,
            getter_prefix:   None,
            getter_suffix:   None,
            accessor_suffix: None,
        }
    }

    const fn bind_as(name: &'static str, accessor_suffix: &'static str) -> Self {
        WriterTypeSpec {
            accessor_suffix: Some(accessor_suffix),
            ..WriterTypeSpec::plain(name)
        }
    }

    const fn converted(name: &'static str, accessor_suffix: &'static str, converter: Converter) -> Self {
        WriterTypeSpec {
            converter: Some(converter),
            ..WriterTypeSpec::bind_as(name, accessor_suffix)
        }
    }

    const fn boolean_like(name: &'static str, converter: Converter) -> Self {
        WriterTypeSpec {
            getter_prefix: Some("is"),
            ..WriterTypeSpec::converted(name, "string", converter)
        }
    }
}

impl TypeSpec for WriterTypeSpec {
    fn name(&self) -> &'static str {
        self.name
    }

    fn converter(&self) -> Option<Converter> {
        self.converter
    }
}

fn boolean_to_string(expr: &str) -> String {
    format!("Boolean.toString({})", expr)
}

fn nullable_boolean_to_string(expr: &str) -> String {
    format!("{expr} == null ? null : Boolean.toString({expr})")
}

fn char_to_string(expr: &str) -> String {
    format!("Character.toString({})", expr)
}

fn nullable_char_to_string(expr: &str) -> String {
    format!("{expr} == null ? null : Character.toString({expr})")
}

fn sql_date(expr: &str) -> String {
    format!("new java.sql.Date({}.getTime())", expr)
}

fn string_boolean_value(expr: &str) -> String {
    format!("{}.value()", expr)
}

lazy_static! {
    pub static ref WRITER_TYPES: TypeRegistry<WriterTypeSpec> = TypeRegistry::new(vec![
        WriterTypeSpec::boolean_like("boolean", boolean_to_string),
        WriterTypeSpec::boolean_like("Boolean", nullable_boolean_to_string),
        WriterTypeSpec::converted("char", "string", char_to_string),
        WriterTypeSpec::converted("Character", "string", nullable_char_to_string),
        WriterTypeSpec::plain("byte"),
        WriterTypeSpec::bind_as("Byte", "object"),
        WriterTypeSpec::plain("short"),
        WriterTypeSpec::bind_as("Short", "object"),
        WriterTypeSpec::plain("int"),
        WriterTypeSpec::bind_as("Integer", "object"),
        WriterTypeSpec::plain("long"),
        WriterTypeSpec::bind_as("Long", "object"),
        WriterTypeSpec::plain("float"),
        WriterTypeSpec::bind_as("Float", "object"),
        WriterTypeSpec::plain("double"),
        WriterTypeSpec::bind_as("Double", "object"),
        WriterTypeSpec::plain("String"),
        WriterTypeSpec::plain("BigDecimal"),
        WriterTypeSpec { converter: Some(sql_date), ..WriterTypeSpec::plain("Date") },
        WriterTypeSpec::bind_as("LocalDate", "object"),
        WriterTypeSpec::bind_as("LocalTime", "object"),
        WriterTypeSpec::bind_as("LocalDateTime", "object"),
        // StringBoolean exposes a plain getter, unlike boolean.
        WriterTypeSpec::converted("StringBoolean", "string", string_boolean_value),
    ])
    .unwrap_or_else(|name| panic!("writer type {:?} is registered twice", name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_uses_is_prefix() {
        let spec = WRITER_TYPES.lookup("boolean").unwrap();
        assert_eq!(spec.getter_prefix, Some("is"));
        assert_eq!(spec.accessor_suffix, Some("string"));
        assert_eq!(spec.converter.unwrap()("obj.isValid()"), "Boolean.toString(obj.isValid())");

        let string_boolean = WRITER_TYPES.lookup("StringBoolean").unwrap();
        assert_eq!(string_boolean.getter_prefix, None);
    }

    #[test]
    fn test_date_converts_to_sql_date() {
        let convert = WRITER_TYPES.lookup("Date").unwrap().converter.unwrap();
        assert_eq!(convert("obj.getBorn()"), "new java.sql.Date(obj.getBorn().getTime())");
    }

    #[test]
    fn test_java_time_types_bind_as_object() {
        for name in ["LocalDate", "LocalTime", "LocalDateTime", "Long"] {
            let spec = WRITER_TYPES.lookup(name).unwrap();
            assert_eq!(spec.accessor_suffix, Some("object"), "{}", name);
            assert!(spec.converter.is_none());
        }
    }

    #[test]
    fn test_tables_register_the_same_names() {
        let readers: Vec<_> = crate::READER_TYPES.names().collect();
        let writers: Vec<_> = WRITER_TYPES.names().collect();
        assert_eq!(readers, writers);
    }
}

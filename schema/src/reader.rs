//! `ResultSet` side of the mapping: how each Java type is read from a row.

use crate::registry::{Converter, TypeRegistry, TypeSpec};
use lazy_static::lazy_static;

/// Builds the full accessor call from a quoted column token.
pub type AccessorTemplate = fn(&str) -> String;

#[derive(Debug, Clone, Default)]
pub struct ReaderTypeSpec {
    pub name:              &'static str,
    pub converter:         Option<Converter>,
    /// Replaces the field identifier in the generated `set…` call.
    pub setter_suffix:     Option<&'static str>,
    /// Replaces the type name in the generated `rs.get…` call.
    pub accessor_suffix:   Option<&'static str>,
    /// Overrides the whole `rs` accessor, e.g. `getObject("", Long.class)`.
    pub accessor_template: Option<AccessorTemplate>,
}

impl ReaderTypeSpec {
    const fn plain(name: &'static str) -> Self {
        ReaderTypeSpec {
            name,
            converter:         None,
            setter_suffix:     None,
            accessor_suffix:   None,
            accessor_template: None,
        }
    }

    const fn read_as(name: &'static str, accessor_suffix: &'static str, converter: Converter) -> Self {
        ReaderTypeSpec {
            name,
            converter:         Some(converter),
            setter_suffix:     None,
            accessor_suffix:   Some(accessor_suffix),
            accessor_template: None,
        }
    }

    const fn templated(name: &'static str, template: AccessorTemplate) -> Self {
        ReaderTypeSpec {
            name,
            converter:         None,
            setter_suffix:     None,
            accessor_suffix:   None,
            accessor_template: Some(template),
        }
    }
}

impl TypeSpec for ReaderTypeSpec {
    fn name(&self) -> &'static str {
        self.name
    }

    fn converter(&self) -> Option<Converter> {
        self.converter
    }
}

fn parse_boolean(expr: &str) -> String {
    format!("Boolean.parseBoolean({})", expr)
}

fn parse_nullable_boolean(expr: &str) -> String {
    format!("{expr} == null ? null : Boolean.parseBoolean({expr})")
}

fn first_char(expr: &str) -> String {
    format!("{}.charAt(0)", expr)
}

fn util_date(expr: &str) -> String {
    format!("(java.util.Date) {}", expr)
}

fn to_local_date(expr: &str) -> String {
    format!("{}.toLocalDate()", expr)
}

fn to_local_time(expr: &str) -> String {
    format!("{}.toLocalTime()", expr)
}

fn to_local_date_time(expr: &str) -> String {
    format!("{}.toLocalDateTime()", expr)
}

fn string_boolean(expr: &str) -> String {
    format!("StringBoolean.fromValue({})", expr)
}

fn get_byte_object(column: &str) -> String {
    format!("getObject({}, Byte.class)", column)
}

fn get_short_object(column: &str) -> String {
    format!("getObject({}, Short.class)", column)
}

fn get_integer_object(column: &str) -> String {
    format!("getObject({}, Integer.class)", column)
}

fn get_long_object(column: &str) -> String {
    format!("getObject({}, Long.class)", column)
}

fn get_float_object(column: &str) -> String {
    format!("getObject({}, Float.class)", column)
}

fn get_double_object(column: &str) -> String {
    format!("getObject({}, Double.class)", column)
}

lazy_static! {
    pub static ref READER_TYPES: TypeRegistry<ReaderTypeSpec> = TypeRegistry::new(vec![
        ReaderTypeSpec::read_as("boolean", "string", parse_boolean),
        ReaderTypeSpec::read_as("Boolean", "string", parse_nullable_boolean),
        ReaderTypeSpec::read_as("char", "string", first_char),
        ReaderTypeSpec::read_as("Character", "string", first_char),
        ReaderTypeSpec::plain("byte"),
        ReaderTypeSpec::templated("Byte", get_byte_object),
        ReaderTypeSpec::plain("short"),
        ReaderTypeSpec::templated("Short", get_short_object),
        ReaderTypeSpec::plain("int"),
        ReaderTypeSpec::templated("Integer", get_integer_object),
        ReaderTypeSpec::plain("long"),
        ReaderTypeSpec::templated("Long", get_long_object),
        ReaderTypeSpec::plain("float"),
        ReaderTypeSpec::templated("Float", get_float_object),
        ReaderTypeSpec::plain("double"),
        ReaderTypeSpec::templated("Double", get_double_object),
        ReaderTypeSpec::plain("String"),
        ReaderTypeSpec::plain("BigDecimal"),
        ReaderTypeSpec { converter: Some(util_date), ..ReaderTypeSpec::plain("Date") },
        ReaderTypeSpec::read_as("LocalDate", "date", to_local_date),
        ReaderTypeSpec::read_as("LocalTime", "time", to_local_time),
        ReaderTypeSpec::read_as("LocalDateTime", "timestamp", to_local_date_time),
        ReaderTypeSpec::read_as("StringBoolean", "string", string_boolean),
    ])
    .unwrap_or_else(|name| panic!("reader type {:?} is registered twice", name));
}

use crate::{error::RowMapError, types::Field};
use indexmap::{map::Entry, IndexMap};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Declarations are read right to left; tokens past this many are ignored.
pub const MAX_DECLARATION_TOKENS: usize = 6;

pub const STATEMENT_TERMINATOR: char = ';';
pub const STATIC_KEYWORD: &str = "static";
pub const TRANSIENT_KEYWORD: &str = "transient";

pub fn is_identifier(token: &str) -> bool {
    IDENTIFIER.is_match(token)
}

/// Parses every declaration in `text`, including static and transient ones,
/// keyed by field name in declaration order.
pub fn parse_declarations(text: &str) -> Result<IndexMap<String, Field>, RowMapError> {
    let mut fields = IndexMap::new();

    for statement in text.split(STATEMENT_TERMINATOR) {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }

        let field = parse_statement(statement)?;
        match fields.entry(field.identifier.clone()) {
            Entry::Occupied(_) => {
                return Err(RowMapError::DuplicateFieldName {
                    identifier: field.identifier,
                    statement:  statement.to_string(),
                });
            }
            Entry::Vacant(slot) => {
                debug!(
                    field = %field.identifier,
                    declared_type = %field.declared_type,
                    is_static = field.is_static,
                    is_transient = field.is_transient,
                    "parsed declaration"
                );
                slot.insert(field);
            }
        }
    }

    Ok(fields)
}

/// Parses `text` and returns the fields that take part in row mapping.
pub fn parse_fields(text: &str) -> Result<Vec<Field>, RowMapError> {
    let declarations = parse_declarations(text)?;
    let total = declarations.len();

    let retained: Vec<Field> = declarations
        .into_values()
        .filter(Field::is_retained)
        .collect();

    if retained.len() < total {
        debug!(skipped = total - retained.len(), "ignoring static and transient fields");
    }
    Ok(retained)
}

fn parse_statement(statement: &str) -> Result<Field, RowMapError> {
    // Reversed: [name, type, modifiers...]
    let tokens: Vec<&str> = WHITESPACE
        .split(statement)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .take(MAX_DECLARATION_TOKENS)
        .collect();

    if tokens.len() < 2 {
        return Err(RowMapError::MissingTokens {
            statement: statement.to_string(),
        });
    }

    let (identifier, declared_type) = (tokens[0], tokens[1]);
    if !is_identifier(identifier) {
        return Err(RowMapError::InvalidFieldIdentifier {
            identifier: identifier.to_string(),
            statement:  statement.to_string(),
        });
    }
    if !is_identifier(declared_type) {
        return Err(RowMapError::InvalidTypeIdentifier {
            type_name: declared_type.to_string(),
            statement: statement.to_string(),
        });
    }

    let modifiers = &tokens[2..];
    Ok(Field {
        identifier:    identifier.to_string(),
        declared_type: declared_type.to_string(),
        is_static:     modifiers.contains(&STATIC_KEYWORD),
        is_transient:  modifiers.contains(&TRANSIENT_KEYWORD),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("startDate"));
        assert!(is_identifier("_id"));
        assert!(is_identifier("row2"));
        assert!(!is_identifier("2row"));
        assert!(!is_identifier("List<String>"));
        assert!(!is_identifier("name="));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_parse_fields_in_order() {
        let fields = parse_fields("private boolean valid; private long id;\n  private String name;").unwrap();
        let names: Vec<_> = fields.iter().map(|f| (f.declared_type.as_str(), f.identifier.as_str())).collect();
        assert_eq!(names, vec![("boolean", "valid"), ("long", "id"), ("String", "name")]);
    }

    #[test]
    fn test_blank_statements_are_skipped() {
        assert!(parse_fields("").unwrap().is_empty());
        assert!(parse_fields(" ;\n; ;").unwrap().is_empty());
        assert_eq!(parse_fields("int a;;  ; int b").unwrap().len(), 2);
    }

    #[test]
    fn test_static_and_transient_are_recorded_but_dropped() {
        let text = "private static final long serialVersionUID; private transient int cache; private int count;";

        let all = parse_declarations(text).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all["serialVersionUID"].is_static);
        assert!(all["cache"].is_transient);

        let retained = parse_fields(text).unwrap();
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].identifier, "count");
    }

    #[test]
    fn test_modifiers_beyond_window_are_ignored() {
        // "static" is the seventh token from the end.
        let fields = parse_fields("static a b c d e int x;").unwrap();
        assert_eq!(fields.len(), 1);
        assert!(!fields[0].is_static);

        let fields = parse_fields("a static b c int x;").unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_missing_tokens() {
        let err = parse_fields("private long id; orphan;").unwrap_err();
        assert!(
            matches!(&err, RowMapError::MissingTokens { statement } if statement == "orphan"),
            "expected MissingTokens but got {:?}",
            err
        );
    }

    #[test]
    fn test_invalid_identifiers() {
        let err = parse_fields("private int 9lives;").unwrap_err();
        assert!(matches!(err, RowMapError::InvalidFieldIdentifier { ref identifier, .. } if identifier == "9lives"));

        let err = parse_fields("private List<String> names;").unwrap_err();
        assert!(matches!(err, RowMapError::InvalidTypeIdentifier { ref type_name, .. } if type_name == "List<String>"));
    }

    #[test]
    fn test_duplicate_field_is_an_error() {
        let err = parse_fields("private int id; private long id;").unwrap_err();
        assert!(matches!(err, RowMapError::DuplicateFieldName { ref identifier, .. } if identifier == "id"));
        assert!(err.to_string().contains("\"private long id\""));

        // A static duplicate still collides.
        assert!(parse_fields("private static int id; private int id;").is_err());
    }
}

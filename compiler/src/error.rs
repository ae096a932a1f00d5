use thiserror::Error;
use crate::utils::quote;

#[derive(Debug, Error)]
pub enum RowMapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON input: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Expected a type and a field name in {}", quote(.statement))]
    MissingTokens {
        statement: String,
    },

    #[error("Invalid field name {} in {}", quote(.identifier), quote(.statement))]
    InvalidFieldIdentifier {
        identifier: String,
        statement:  String,
    },

    #[error("Invalid type name {} in {}", quote(.type_name), quote(.statement))]
    InvalidTypeIdentifier {
        type_name: String,
        statement: String,
    },

    #[error("The field {} is declared twice (second declaration: {})", quote(.identifier), quote(.statement))]
    DuplicateFieldName {
        identifier: String,
        statement:  String,
    },

    #[error("{0}")]
    MissingIdentifier(&'static str),
}

//! brine-rowmap
//!
//! Generates the JDBC boilerplate that moves a Java object's fields in and out
//! of the database.
//!
//! - `generate` / `generate_json` (validated entry points for callers)
//! - `GenerationRequest` (either direction, serializable)
//! - re-exports of the compiler and registry crates
//!
//! ```
//! use brine_rowmap::{generate, GenerationRequest, ObjectToWriterRequest};
//!
//! let request = GenerationRequest::ObjectToWriter(ObjectToWriterRequest {
//!     writer_id:   "ps".into(),
//!     object_id:   "obj".into(),
//!     fields_text: "private long id;".into(),
//!     counter_id:  None,
//! });
//! assert_eq!(generate(&request).unwrap(), "ps.setLong(1, obj.getId());");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use brine_rowmap_compiler::error::RowMapError;
pub use brine_rowmap_compiler::types::{
    ColumnCase, ColumnNameSpec, Field, ObjectToWriterRequest, ReaderToObjectRequest,
};
pub use brine_rowmap_compiler::{
    generate_object_to_writer_code, generate_reader_to_object_code, parse_declarations, parse_fields,
};
pub use brine_rowmap_schema::{READER_TYPES, WRITER_TYPES};

/// The class body offered to users before they paste their own.
pub const SAMPLE_FIELDS: &str = "private boolean valid;
private long id;
private String name;
private double salary;
private LocalDate startDate;
private Double rate;";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "direction", rename_all = "snake_case")]
pub enum GenerationRequest {
    ReaderToObject {
        #[serde(flatten)]
        request: ReaderToObjectRequest,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        naming:  Option<ColumnNameSpec>,
    },
    ObjectToWriter(ObjectToWriterRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub code: String,
}

impl GenerationRequest {
    /// Rejects requests with a blank identifier or no field text.
    pub fn validate(&self) -> Result<(), RowMapError> {
        let (target_id, target_missing, object_id, fields_text) = match self {
            GenerationRequest::ReaderToObject { request, .. } => (
                &request.reader_id,
                "ResultSet identifier is required.",
                &request.object_id,
                &request.fields_text,
            ),
            GenerationRequest::ObjectToWriter(request) => (
                &request.writer_id,
                "PreparedStatement identifier is required.",
                &request.object_id,
                &request.fields_text,
            ),
        };

        if target_id.trim().is_empty() {
            return Err(RowMapError::MissingIdentifier(target_missing));
        }
        if object_id.trim().is_empty() {
            return Err(RowMapError::MissingIdentifier("Object identifier is required."));
        }
        if fields_text.trim().is_empty() {
            return Err(RowMapError::MissingIdentifier("Class fields are required."));
        }
        Ok(())
    }
}

/// Validates `request` and generates its code.
pub fn generate(request: &GenerationRequest) -> Result<String, RowMapError> {
    request.validate()?;
    match request {
        GenerationRequest::ReaderToObject { request, naming } => {
            debug!(reader = %request.reader_id, object = %request.object_id, "generating ResultSet mapping");
            generate_reader_to_object_code(request, naming.as_ref())
        }
        GenerationRequest::ObjectToWriter(request) => {
            debug!(writer = %request.writer_id, object = %request.object_id, "generating PreparedStatement binding");
            generate_object_to_writer_code(request)
        }
    }
}

/// Takes a JSON `GenerationRequest` and returns a pretty-printed `GenerationResponse`.
pub fn generate_json(json: &str) -> Result<String, RowMapError> {
    let request: GenerationRequest = serde_json::from_str(json)?;
    let code = generate(&request)?;
    Ok(serde_json::to_string_pretty(&GenerationResponse { code })?)
}

pub mod error {
    pub use brine_rowmap_compiler::error::RowMapError;
}

pub mod schema {
    pub use brine_rowmap_schema::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_reports_first_missing_identifier() {
        let request = GenerationRequest::ReaderToObject {
            request: ReaderToObjectRequest {
                reader_id:   " ".into(),
                object_id:   "".into(),
                fields_text: SAMPLE_FIELDS.into(),
            },
            naming: None,
        };
        let err = generate(&request).unwrap_err();
        assert_eq!(err.to_string(), "ResultSet identifier is required.");

        let request = GenerationRequest::ObjectToWriter(ObjectToWriterRequest {
            writer_id:   "ps".into(),
            object_id:   "obj".into(),
            fields_text: "\n".into(),
            counter_id:  None,
        });
        assert_eq!(generate(&request).unwrap_err().to_string(), "Class fields are required.");
    }

    #[test]
    fn test_generate_json_reader_with_naming() {
        let json = r#"{
            "direction": "reader_to_object",
            "reader_id": "rs",
            "object_id": "emp",
            "fields_text": "private LocalDate startDate;",
            "naming": { "generate_column_names": true, "use_separator": true, "column_case": "upper" }
        }"#;
        let out: GenerationResponse = serde_json::from_str(&generate_json(json).unwrap()).unwrap();
        assert_eq!(out.code, "emp.setStartDate(rs.getDate(\"START_DATE\").toLocalDate());");
    }

    #[test]
    fn test_generate_json_writer_with_counter() {
        let json = r#"{"direction": "object_to_writer", "writer_id": "ps", "object_id": "o",
                       "fields_text": "private String name;", "counter_id": "n"}"#;
        let out: GenerationResponse = serde_json::from_str(&generate_json(json).unwrap()).unwrap();
        assert_eq!(out.code, "int n = 1;\nps.setString(n++, o.getName());");
    }

    #[test]
    fn test_generate_json_rejects_malformed_input() {
        let err = generate_json(r#"{"direction": "sideways"}"#).unwrap_err();
        assert!(matches!(err, RowMapError::Config(_)));
    }

    #[test]
    fn test_sample_fields_generate_in_both_directions() {
        let fields = parse_fields(SAMPLE_FIELDS).unwrap();
        assert_eq!(fields.len(), 6);

        let request = GenerationRequest::ObjectToWriter(ObjectToWriterRequest {
            writer_id:   "ps".into(),
            object_id:   "obj".into(),
            fields_text: SAMPLE_FIELDS.into(),
            counter_id:  None,
        });
        assert_eq!(generate(&request).unwrap().lines().count(), 6);
    }
}

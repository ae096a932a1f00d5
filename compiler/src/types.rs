use serde::{Deserialize, Serialize};

/// One parsed member declaration, e.g. `private long id;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub identifier:    String,
    pub declared_type: String,
    pub is_static:     bool,
    pub is_transient:  bool,
}

impl Field {
    /// Static and transient members take no part in row mapping.
    pub fn is_retained(&self) -> bool {
        !self.is_static && !self.is_transient
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnCase {
    Upper,
    Lower,
    #[default]
    Unchanged,
}

/// Naming policy for the column literals of the `ResultSet` accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNameSpec {
    pub generate_column_names: bool,
    pub use_separator:         bool,
    pub separator:             String,
    pub column_case:           ColumnCase,
}

impl Default for ColumnNameSpec {
    fn default() -> Self {
        ColumnNameSpec {
            generate_column_names: false,
            use_separator:         false,
            separator:             "_".to_string(),
            column_case:           ColumnCase::Unchanged,
        }
    }
}

/// Input for `ResultSet` → object code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderToObjectRequest {
    pub reader_id:   String,
    pub object_id:   String,
    pub fields_text: String,
}

/// Input for object → `PreparedStatement` code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectToWriterRequest {
    pub writer_id:   String,
    pub object_id:   String,
    pub fields_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_id:  Option<String>,
}

impl ObjectToWriterRequest {
    /// The counter identifier, ignoring blank values.
    pub fn counter(&self) -> Option<&str> {
        self.counter_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

//! brine-rowmap-compiler
//!
//! This crate implements:
//!  1) A parser for blocks of Java field declarations (`private long id;`),
//!  2) Column name derivation for `ResultSet` accessors (`startDate` → `"START_DATE"`),
//!  3) `ResultSet` → object code generation (`generate_reader_to_object_code`),
//!  4) object → `PreparedStatement` code generation (`generate_object_to_writer_code`),
//!  5) Error types (`RowMapError`).
//!
//! Every entry point is a pure function of its input and the static registries
//! in `brine-rowmap-schema`.

pub mod error;
pub mod types;
pub mod utils;
pub mod parser;
pub mod naming;
pub mod gen_reader;
pub mod gen_writer;

pub use error::RowMapError;
pub use gen_reader::generate_reader_to_object_code;
pub use gen_writer::generate_object_to_writer_code;
pub use naming::{column_token, split_words};
pub use parser::{is_identifier, parse_declarations, parse_fields};
pub use types::{ColumnCase, ColumnNameSpec, Field, ObjectToWriterRequest, ReaderToObjectRequest};

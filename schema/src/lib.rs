//! Static type registries for the brine-rowmap code generators.
//!
//! Each registry maps a Java type name to the accessor names and value
//! conversions needed on one side of a JDBC round trip:
//!
//! ```
//! use brine_rowmap_schema::*;
//!
//! let spec = READER_TYPES.lookup("LocalDate").unwrap();
//! assert_eq!(spec.accessor_suffix, Some("date"));
//!
//! let unknown = WRITER_TYPES.resolve("Address", true).unwrap();
//! assert!(unknown.is_unknown());
//! ```
//!
//! Both tables are built once on first use and never mutated, so they can be
//! shared freely between threads.

pub mod registry;
pub mod reader;
pub mod writer;

pub use registry::*;
pub use reader::*;
pub use writer::*;

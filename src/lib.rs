//! testsheet - test-suite metadata inventory to XLSX
//!
//! Inspects a test suite's metadata (identifiers, categories, priorities,
//! descriptions, custom key/value properties, data-driven case sets) and
//! renders it into a single table: one row per discoverable test case,
//! sorted by test name, with missing fields flagged by a highlight. Test
//! bodies are never executed.
//!
//! # Usage
//!
//! ```
//! use testsheet::types::Suite;
//! use testsheet::{build_report, export};
//!
//! let manifest = r#"{ "types": [ { "name": "LoginTests", "members": [
//!     { "name": "ValidLogin", "annotations": [
//!         { "typeName": "TestAttribute" },
//!         { "typeName": "PriorityAttribute", "args": ["High"] }
//!     ] }
//! ] } ] }"#;
//!
//! let suite = Suite::from_json(manifest)?;
//! let report = build_report(&suite.types);
//! let bytes = export::write_xlsx(&report.grid)?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), testsheet::TestsheetError>(())
//! ```

pub mod annotations;
pub mod assemble;
pub mod cell_ref;
pub mod discover;
pub mod error;
pub mod expand;
pub mod export;
pub mod report;
pub mod types;

pub use error::{Result, TestsheetError};
pub use report::{build_report, Diagnostic, Report};

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

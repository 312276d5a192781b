//! Structured error types for testsheet.
//!
//! Field-level absence is not an error: a missing annotation becomes a
//! highlighted cell (see [`crate::assemble`]). The variants here cover
//! structural failures and the I/O boundary.

/// All errors that can occur while building or writing a report.
#[derive(Debug, thiserror::Error)]
pub enum TestsheetError {
    /// ZIP archive error while packaging the workbook.
    #[error("ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Suite manifest could not be parsed.
    #[error("suite manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// A parameterized test case names a data source that does not resolve
    /// to a non-public case source on its declaring type.
    #[error("data source `{source_name}` not found on `{class_name}` (test `{method_name}`)")]
    UnresolvableSource {
        class_name: String,
        method_name: String,
        source_name: String,
    },

    /// A resolved case source failed when invoked.
    #[error("data source `{source_name}` on `{class_name}` failed: {message}")]
    SourceInvocation {
        class_name: String,
        source_name: String,
        message: String,
    },

    /// A yielded data item does not have the case-description shape.
    #[error("case item {index} from `{source_name}` is malformed: {message}")]
    MalformedCase {
        source_name: String,
        index: usize,
        message: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TestsheetError>;

//! Error types for the calculation pipeline.
//!
//! Every failure the reader, aggregator, or formatter can produce is a
//! variant here, carrying the context needed for the final user-facing
//! message (offending token, file path, requested operation).

use std::path::PathBuf;
use thiserror::Error;

/// A failure anywhere in the read → aggregate → format pipeline.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The input path does not resolve to an existing file.
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The input file exists but is not readable.
    #[error("Cannot access file: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// A whitespace-delimited token could not be parsed as a number.
    #[error("Invalid value in file: '{token}'")]
    InvalidNumber { token: String },

    /// The file contained no tokens, or an aggregation was attempted
    /// over zero elements.
    #[error("Input contains no numbers")]
    EmptyInput,

    /// An operation name outside the recognized set reached the aggregator.
    #[error("Unsupported operation: {name}")]
    UnsupportedOperation { name: String },

    /// Any other I/O failure while reading the input file.
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_names_token() {
        let err = CalcError::InvalidNumber {
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value in file: 'abc'");
    }

    #[test]
    fn test_empty_input_message() {
        assert_eq!(
            CalcError::EmptyInput.to_string(),
            "Input contains no numbers"
        );
    }

    #[test]
    fn test_file_not_found_names_path() {
        let err = CalcError::FileNotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.to_string(), "File not found: missing.txt");
    }
}

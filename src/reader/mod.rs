//! Number reader for loading and tokenizing input files.
//!
//! This module turns a file path into an ordered sequence of floats,
//! mapping filesystem failures to the pipeline error taxonomy.

use crate::error::CalcError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read a whitespace-delimited number file into an ordered sequence.
///
/// The whole file is loaded as UTF-8 text, split on runs of whitespace
/// (spaces, tabs, newlines), and each token is parsed as an `f64`.
/// Parsing stops at the first bad token; no partial results are returned.
///
/// Fails with:
/// - [`CalcError::FileNotFound`] if the path does not exist
/// - [`CalcError::PermissionDenied`] if the file is unreadable
/// - [`CalcError::InvalidNumber`] naming the first unparseable token
/// - [`CalcError::EmptyInput`] if the file holds no tokens at all
pub fn read_numbers(path: &Path) -> Result<Vec<f64>, CalcError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CalcError::FileNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => CalcError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => CalcError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut numbers = Vec::new();
    for token in content.split_whitespace() {
        let value: f64 = token.parse().map_err(|_| CalcError::InvalidNumber {
            token: token.to_string(),
        })?;
        numbers.push(value);
    }

    if numbers.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    debug!(
        "Parsed {} numbers from {}",
        numbers.len(),
        path.display()
    );

    Ok(numbers)
}

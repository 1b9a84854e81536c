//! Aggregate operations over a parsed number sequence.
//!
//! This module defines the operation set and applies a single reducer
//! over the full sequence, producing one numeric result.

use crate::error::CalcError;
use std::fmt;
use std::str::FromStr;

/// An aggregate operation applied over the whole number sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Operation {
    /// Arithmetic sum of all elements.
    Sum,
    /// Sum divided by element count.
    Avg,
    /// Smallest element.
    Min,
    /// Largest element.
    Max,
}

impl Operation {
    /// Display label used for the final result line.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Sum => "Sum",
            Operation::Avg => "Average value",
            Operation::Min => "Minimum value",
            Operation::Max => "Maximum value",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Sum => write!(f, "sum"),
            Operation::Avg => write!(f, "avg"),
            Operation::Min => write!(f, "min"),
            Operation::Max => write!(f, "max"),
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Case-insensitive lookup; anything outside the recognized set
    /// fails with [`CalcError::UnsupportedOperation`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Operation::Sum),
            "avg" => Ok(Operation::Avg),
            "min" => Ok(Operation::Min),
            "max" => Ok(Operation::Max),
            _ => Err(CalcError::UnsupportedOperation {
                name: s.to_string(),
            }),
        }
    }
}

/// Apply an aggregate operation to a non-empty number sequence.
///
/// The reader already guarantees a non-empty sequence, but the invariant
/// is enforced here independently since this function may be called
/// standalone.
///
/// `sum` accumulates left-to-right in input order, so floating-point
/// rounding matches the order the numbers appeared in the file. `min`
/// and `max` use plain f64 comparison semantics.
pub fn calculate(data: &[f64], operation: Operation) -> Result<f64, CalcError> {
    if data.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let result = match operation {
        Operation::Sum => data.iter().sum(),
        Operation::Avg => data.iter().sum::<f64>() / data.len() as f64,
        Operation::Min => data.iter().copied().fold(f64::INFINITY, f64::min),
        Operation::Max => data.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(calculate(&data, Operation::Sum).unwrap(), 10.0);
    }

    #[test]
    fn test_avg() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(calculate(&data, Operation::Avg).unwrap(), 2.5);
    }

    #[test]
    fn test_avg_is_float_division() {
        let data = vec![1.0, 2.0];
        assert_eq!(calculate(&data, Operation::Avg).unwrap(), 1.5);
    }

    #[test]
    fn test_min_max() {
        let data = vec![3.5, -2.0, 7.25, 0.0];
        assert_eq!(calculate(&data, Operation::Min).unwrap(), -2.0);
        assert_eq!(calculate(&data, Operation::Max).unwrap(), 7.25);
    }

    #[test]
    fn test_single_element() {
        let data = vec![5.0];
        assert_eq!(calculate(&data, Operation::Min).unwrap(), 5.0);
        assert_eq!(calculate(&data, Operation::Max).unwrap(), 5.0);
        assert_eq!(calculate(&data, Operation::Avg).unwrap(), 5.0);
    }

    #[test]
    fn test_min_max_are_elements() {
        let data = vec![9.0, 1.0, 5.0, 1.0, 9.0];
        let min = calculate(&data, Operation::Min).unwrap();
        let max = calculate(&data, Operation::Max).unwrap();
        assert!(data.contains(&min));
        assert!(data.contains(&max));
        assert!(data.iter().all(|&x| min <= x && x <= max));
    }

    #[test]
    fn test_avg_times_count_equals_sum() {
        let data = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
        let sum = calculate(&data, Operation::Sum).unwrap();
        let avg = calculate(&data, Operation::Avg).unwrap();
        assert!((avg * data.len() as f64 - sum).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(matches!(
            calculate(&[], Operation::Sum),
            Err(CalcError::EmptyInput)
        ));
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("sum".parse::<Operation>().unwrap(), Operation::Sum);
        assert_eq!("AVG".parse::<Operation>().unwrap(), Operation::Avg);
        assert_eq!("Min".parse::<Operation>().unwrap(), Operation::Min);
        assert_eq!("max".parse::<Operation>().unwrap(), Operation::Max);
    }

    #[test]
    fn test_unsupported_operation_carries_name() {
        match "median".parse::<Operation>() {
            Err(CalcError::UnsupportedOperation { name }) => assert_eq!(name, "median"),
            other => panic!("expected UnsupportedOperation, got {:?}", other),
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Operation::Sum.label(), "Sum");
        assert_eq!(Operation::Avg.label(), "Average value");
        assert_eq!(Operation::Min.label(), "Minimum value");
        assert_eq!(Operation::Max.label(), "Maximum value");
    }
}

//! Error types for natural breaks classification
//!
//! Provides a unified error type for all breaks crates.

use thiserror::Error;

/// Core error type for classification operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Requested fewer than one class
    #[error("Invalid class count: {requested} (at least 1 class is required)")]
    InvalidClassCount { requested: usize },

    /// Input contains NaN or an infinity
    #[error("Invalid value at index {index}: {value} is not finite")]
    InvalidValue { index: usize, value: f64 },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input exceeds the configured exact-optimization limit
    #[error("Input too large for exact optimization: {len} values (limit {limit})")]
    InputTooLarge { len: usize, limit: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check a class count, rejecting zero
    pub fn check_class_count(k: usize) -> Result<()> {
        if k < 1 {
            return Err(Self::InvalidClassCount { requested: k });
        }
        Ok(())
    }

    /// Find the first non-finite value, if any
    pub fn check_finite(values: &[f64]) -> Result<()> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(Self::InvalidValue {
                index,
                value: values[index],
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidClassCount { requested: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid class count: 0 (at least 1 class is required)"
        );

        let err = Error::InvalidValue {
            index: 3,
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "Invalid value at index 3: NaN is not finite");

        let err = Error::InvalidParameter("unknown strategy 'foo'".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: unknown strategy 'foo'");

        let err = Error::InputTooLarge { len: 5000, limit: 1000 };
        assert_eq!(
            err.to_string(),
            "Input too large for exact optimization: 5000 values (limit 1000)"
        );
    }

    #[test]
    fn test_check_class_count() {
        assert!(Error::check_class_count(1).is_ok());
        assert!(Error::check_class_count(7).is_ok());
        assert_eq!(
            Error::check_class_count(0),
            Err(Error::InvalidClassCount { requested: 0 })
        );
    }

    #[test]
    fn test_check_finite_reports_first_offender() {
        assert!(Error::check_finite(&[]).is_ok());
        assert!(Error::check_finite(&[1.0, -2.0, 3.5]).is_ok());

        match Error::check_finite(&[1.0, f64::INFINITY, f64::NAN]) {
            Err(Error::InvalidValue { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, f64::INFINITY);
            }
            other => panic!("Wrong result: {other:?}"),
        }

        assert!(matches!(
            Error::check_finite(&[f64::NEG_INFINITY]),
            Err(Error::InvalidValue { index: 0, .. })
        ));
    }
}

//! Crate-level error type
//!
//! [`ParseError`] and [`EvalError`] describe failures of a single stage. This
//! module wraps them together with the failures of the surrounding pipeline
//! (variable limits, writing file artifacts) so a front-end can handle one
//! type.

use crate::expression::{EvalError, ParseError};
use std::fmt;
use std::io;

/// The main error type for building and delivering truth tables
#[derive(Debug)]
pub enum Error {
    /// The input could not be parsed
    Parse(ParseError),

    /// Evaluation hit an assignment without a value for one of its variables
    ///
    /// Tables built through [`Expression::build_truth_table`] always supply
    /// complete assignments, so seeing this there means an internal invariant
    /// was broken.
    ///
    /// [`Expression::build_truth_table`]: crate::Expression::build_truth_table
    Eval(EvalError),

    /// The expression has more variables than the configured ceiling
    ///
    /// Table size is `2^count` rows, so callers cap `count` to bound the work.
    VariableLimit {
        /// Number of distinct variables in the expression
        count: usize,
        /// The configured maximum
        limit: usize,
    },

    /// IO error while writing a table artifact
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "Failed to parse expression: {}", err),
            Error::Eval(err) => write!(f, "Failed to evaluate expression: {}", err),
            Error::VariableLimit { count, limit } => {
                write!(
                    f,
                    "Expression uses {} variables but at most {} are allowed",
                    count, limit
                )?;
                match u32::try_from(*count).ok().and_then(|c| 1u128.checked_shl(c)) {
                    Some(rows) => write!(f, " ({} rows)", rows),
                    None => write!(f, " (2^{} rows)", count),
                }
            }
            Error::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Eval(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::VariableLimit { .. } => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(io_err) => io_err,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_variable_limit_display() {
        let err = Error::VariableLimit {
            count: 10,
            limit: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("10 variables"));
        assert!(msg.contains("at most 8"));
        assert!(msg.contains("1024 rows"));
    }

    #[test]
    fn test_variable_limit_display_beyond_u128() {
        let err = Error::VariableLimit {
            count: 127,
            limit: 12,
        };
        assert!(err.to_string().contains(&format!("{} rows", 1u128 << 127)));

        let err = Error::VariableLimit {
            count: 128,
            limit: 12,
        };
        assert!(err.to_string().contains("(2^128 rows)"));

        let err = Error::VariableLimit {
            count: usize::MAX,
            limit: 12,
        };
        assert!(err.to_string().contains(&format!("(2^{} rows)", usize::MAX)));
    }

    #[test]
    fn test_parse_error_wrapping() {
        let err: Error = ParseError::UnbalancedParentheses { position: 3 }.into();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("Unbalanced parentheses"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_round_trip() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_non_io_error_to_io_error() {
        let err = Error::VariableLimit { count: 3, limit: 2 };
        assert!(err.source().is_none());
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}

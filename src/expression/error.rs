//! Error types for boolean expression parsing and evaluation

use super::Variable;
use std::fmt;
use std::io;

/// Errors related to boolean expression parsing
///
/// Positions are byte offsets into the *normalized* expression, i.e. after
/// textual operators such as `and` or `->` have been rewritten to their
/// single-character forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Parenthesis depth did not return to zero, or a `)` had no matching `(`
    UnbalancedParentheses {
        /// Offset of the `)` with no opening partner, or of the `(` never closed
        position: usize,
    },
    /// The input (or a parenthesized group) contains no operand at all
    EmptyExpression,
    /// A character outside the accepted alphabet
    UnsupportedCharacter {
        /// The rejected character
        character: char,
        /// Where it was found
        position: usize,
    },
    /// A `~` that is not directly attached to a variable or an opening parenthesis
    DanglingNegation {
        /// Offset of the `~`
        position: usize,
    },
    /// A binary operator with nothing on one of its sides
    MissingOperand {
        /// Offset of the operator
        position: usize,
    },
    /// Two operands next to each other with no operator between them
    UnexpectedOperand {
        /// Offset of the second operand
        position: usize,
    },
    /// Parentheses or operator chains nest deeper than
    /// [`MAX_NESTING_DEPTH`](crate::expression::MAX_NESTING_DEPTH)
    NestingTooDeep {
        /// Offset of the `(` or operator that crossed the limit
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnbalancedParentheses { position } => {
                write!(f, "Unbalanced parentheses at position {}", position)
            }
            ParseError::EmptyExpression => write!(f, "Expression is empty"),
            ParseError::UnsupportedCharacter {
                character,
                position,
            } => write!(
                f,
                "Unsupported character {:?} at position {}",
                character, position
            ),
            ParseError::DanglingNegation { position } => write!(
                f,
                "Negation at position {} must be followed by a variable or '('",
                position
            ),
            ParseError::MissingOperand { position } => {
                write!(f, "Operator at position {} is missing an operand", position)
            }
            ParseError::UnexpectedOperand { position } => write!(
                f,
                "Unexpected operand at position {}, expected an operator",
                position
            ),
            ParseError::NestingTooDeep { position } => write!(
                f,
                "Expression nests deeper than {} levels at position {}",
                super::MAX_NESTING_DEPTH,
                position
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur while evaluating an expression tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The assignment has no truth value for a variable used by a leaf
    MissingTruthValue {
        /// The variable that could not be looked up
        variable: Variable,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::MissingTruthValue { variable } => {
                write!(f, "No truth value assigned to variable '{}'", variable)
            }
        }
    }
}

impl std::error::Error for EvalError {}

impl From<EvalError> for io::Error {
    fn from(err: EvalError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

//! # proptable
//!
//! Parse propositional logic expressions and print their truth tables.
//!
//! ## Overview
//!
//! An input such as `not (a and b) or c` goes through four stages:
//!
//! 1. **Normalization**: operator spellings are rewritten to single
//!    characters (`~(a ^ b) v c`).
//! 2. **Parsing**: the normalized text becomes an [`Expression`], a tree of
//!    [`Node`]s plus the sorted list of [`Variable`]s it uses.
//! 3. **Evaluation**: the tree is evaluated under every assignment of its
//!    variables.
//! 4. **Tabulation**: the values of the variables, of every negated
//!    sub-expression and of the whole expression are collected into a
//!    [`TruthTable`] and rendered as fixed-width text.
//!
//! ```
//! use proptable::parse;
//!
//! # fn main() -> Result<(), proptable::Error> {
//! let expr = parse("~a v b")?;
//! let table = expr.build_truth_table()?;
//!
//! assert_eq!(table.columns(), ["a", "b", "~a", "~a v b"]);
//! for line in table.render_lines() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Syntax
//!
//! | Connective    | Spellings          |
//! |---------------|--------------------|
//! | NOT           | `~`, `!`, `not`    |
//! | AND           | `^`, `&&`, `and`   |
//! | OR            | `v`, `\|\|`, `or`  |
//! | IMPLIES       | `->`               |
//! | BICONDITIONAL | `<->`              |
//!
//! Variables are single lowercase letters. `v` is **not** a variable: it is
//! the OR operator.
//!
//! Operators have no precedence. A chain on one nesting level is read left to
//! right, so `a v b ^ c` is `(a v b) ^ c`. Use parentheses to group.
//!
//! A negated implication or biconditional, such as `~(a -> b)`, evaluates as
//! if the negation were absent. AND and OR honour it (NAND, NOR).
//!
//! ## Bounding the Work
//!
//! A table over `n` variables has `2^n` rows. Front-ends taking untrusted
//! input should go through [`Expression::build_truth_table_with`] and a
//! [`TableConfig`] ceiling.
//!
//! ## Thread Safety
//!
//! Parsing and tabulation keep no global state. [`Expression`] and
//! [`TruthTable`] are immutable and `Send + Sync`, so tables can be built on
//! worker threads:
//!
//! ```
//! use proptable::Expression;
//! use std::thread;
//!
//! let handles: Vec<_> = ["a ^ b", "a v b", "a -> b"]
//!     .into_iter()
//!     .map(|input| {
//!         thread::spawn(move || {
//!             let table = Expression::parse(input).unwrap().build_truth_table().unwrap();
//!             table.num_rows()
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), 4);
//! }
//! ```
//!
//! ## Chat Replies
//!
//! The [`report`] module packages a table as a message, falling back to a
//! temporary file attachment when it is too large to send inline.

// Public modules
pub mod error;
pub mod expression;
pub mod report;
pub mod table;

// Re-export high-level public API
pub use error::Error;
pub use expression::{
    normalize, Assignment, BinaryNode, EvalError, Expression, Leaf, Node, Operator, ParseError,
    Variable, MAX_NESTING_DEPTH,
};
pub use table::{assignments, EvaluationRecord, Row, TruthTable};

/// Parse an expression from a string
///
/// Shorthand for [`Expression::parse`].
pub fn parse(expression: &str) -> Result<Expression, ParseError> {
    Expression::parse(expression)
}

/// Configuration for truth table synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Largest number of distinct variables an expression may have
    ///
    /// Rows grow as `2^max_variables`; the alphabet allows at most 25.
    ///
    /// **Default:** `12`
    pub max_variables: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig { max_variables: 12 }
    }
}

impl TableConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(TableConfig::new().max_variables, 12);
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(parse("a ^ b"), Expression::parse("a ^ b"));
    }

    #[test]
    fn test_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expression>();
        assert_send_sync::<TruthTable>();
    }
}

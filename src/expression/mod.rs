//! Propositional expressions: normalization, parsing, evaluation and display
//!
//! # Main Types
//!
//! - [`Expression`]: a parsed expression, i.e. the root [`Node`] of its tree
//!   plus the sorted list of [`Variable`]s it mentions.
//! - [`Node`]: either a [`Leaf`] (variable reference) or a [`BinaryNode`]
//!   (connective). Both carry their own negation flag.
//!
//! # Quick Start
//!
//! ```
//! use proptable::{Assignment, Expression, Variable};
//!
//! let expr = Expression::parse("a -> b").unwrap();
//!
//! let a = Variable::new('a').unwrap();
//! let b = Variable::new('b').unwrap();
//! let assignment = Assignment::from([(a, true), (b, false)]);
//! assert_eq!(expr.evaluate(&assignment), Ok(false));
//! ```
//!
//! # Accepted Language
//!
//! Variables are single lowercase letters other than `v`, which is the OR
//! operator. Chains of operators on the same nesting level are folded left to
//! right without precedence; use parentheses to group.

mod ast;
mod display;
pub mod error;
mod eval;
mod normalizer;
mod parser;

pub use ast::{BinaryNode, Leaf, Node, Operator, Variable};
pub use error::{EvalError, ParseError};
pub use eval::Assignment;
pub use normalizer::normalize;
pub use parser::MAX_NESTING_DEPTH;

/// A parsed propositional expression
///
/// Immutable once built. Two expressions parsed from the same input are
/// structurally equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    root: Node,
    /// Ascending, without duplicates
    variables: Vec<Variable>,
}

impl Expression {
    /// The root of the expression tree
    ///
    /// Usually a [`Node::Binary`]; a bare variable such as `~a` yields a
    /// [`Node::Leaf`].
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The variables used by the expression, in ascending order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Evaluate the expression under a single assignment
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        self.root.evaluate(assignment)
    }
}

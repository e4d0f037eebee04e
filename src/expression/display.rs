//! Display formatting for expression trees
//!
//! The rendered text is the label used for truth table columns, and it parses
//! back into the same tree: `->` and `<->` are rewritten to `>` and `-` by the
//! normalizer.

use super::ast::{BinaryNode, Leaf, Node};
use super::Expression;
use std::fmt;

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "~")?;
        }
        write!(f, "{}", self.name)
    }
}

impl BinaryNode {
    fn fmt_operand(node: &Node, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match node {
            // A negated child already brings its own `~( ... )`
            Node::Binary(inner) if !inner.negated => write!(f, "({})", inner),
            other => write!(f, "{}", other),
        }
    }
}

impl fmt::Display for BinaryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "~(")?;
        }
        Self::fmt_operand(&self.left, f)?;
        write!(f, " {} ", self.operator.display_token())?;
        Self::fmt_operand(&self.right, f)?;
        if self.negated {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            Node::Binary(node) => fmt::Display::fmt(node, f),
        }
    }
}

/// Renders the root node
///
/// # Examples
///
/// ```
/// use proptable::Expression;
///
/// let expr = Expression::parse("not (a and b) or c").unwrap();
/// assert_eq!(expr.to_string(), "~(a ^ b) v c");
/// ```
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.root(), f)
    }
}

//! AST representation of propositional expressions
//!
//! The tree has exactly two node kinds: a [`Leaf`] referencing a variable and a
//! [`BinaryNode`] combining two sub-trees with a connective. Both carry their
//! own negation flag; there is no separate NOT node.

use std::collections::BTreeSet;
use std::fmt;

/// A propositional variable
///
/// Variables are single lowercase ASCII letters. The letter `v` is reserved
/// because it doubles as the OR operator, so `a v b` can never mean anything
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(char);

impl Variable {
    /// The letter reserved for the OR operator
    pub const RESERVED: char = 'v';

    /// Create a variable from a letter, or `None` if the letter is not allowed
    pub fn new(letter: char) -> Option<Self> {
        if Self::is_valid(letter) {
            Some(Variable(letter))
        } else {
            None
        }
    }

    /// Whether `letter` can name a variable
    pub fn is_valid(letter: char) -> bool {
        letter.is_ascii_lowercase() && letter != Self::RESERVED
    }

    /// The variable's letter
    pub fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary connective of a [`BinaryNode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Conjunction, written `^`
    And,
    /// Disjunction, written `v`
    Or,
    /// Material implication, written `->` (normalized to `>`)
    Implies,
    /// Biconditional, written `<->` (normalized to `-`)
    Biconditional,
}

impl Operator {
    /// Recognise an operator in the normalized alphabet
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '^' => Some(Operator::And),
            'v' => Some(Operator::Or),
            '>' => Some(Operator::Implies),
            '-' => Some(Operator::Biconditional),
            _ => None,
        }
    }

    /// Token used when rendering the operator for display
    pub fn display_token(self) -> &'static str {
        match self {
            Operator::And => "^",
            Operator::Or => "v",
            Operator::Implies => "->",
            Operator::Biconditional => "<->",
        }
    }
}

/// A variable reference, optionally negated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Leaf {
    pub name: Variable,
    pub negated: bool,
}

/// Two sub-trees joined by a connective, optionally negated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryNode {
    pub operator: Operator,
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub negated: bool,
}

/// A node of the expression tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Leaf(Leaf),
    Binary(BinaryNode),
}

impl Node {
    /// A non-negated leaf for `name`
    pub fn leaf(name: Variable) -> Self {
        Node::Leaf(Leaf {
            name,
            negated: false,
        })
    }

    /// A non-negated binary node
    pub fn binary(operator: Operator, left: Node, right: Node) -> Self {
        Node::Binary(BinaryNode {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            negated: false,
        })
    }

    pub fn is_negated(&self) -> bool {
        match self {
            Node::Leaf(leaf) => leaf.negated,
            Node::Binary(node) => node.negated,
        }
    }

    /// Flip this node's own negation flag
    pub fn negate(mut self) -> Self {
        match &mut self {
            Node::Leaf(leaf) => leaf.negated = !leaf.negated,
            Node::Binary(node) => node.negated = !node.negated,
        }
        self
    }

    /// Variables referenced anywhere below this node, in ascending order
    pub fn variables(&self) -> BTreeSet<Variable> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<Variable>) {
        match self {
            Node::Leaf(leaf) => {
                vars.insert(leaf.name);
            }
            Node::Binary(node) => {
                node.left.collect_variables(vars);
                node.right.collect_variables(vars);
            }
        }
    }

    /// Number of nodes in the tree rooted here
    pub fn size(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Binary(node) => 1 + node.left.size() + node.right.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(letter: char) -> Variable {
        Variable::new(letter).unwrap()
    }

    #[test]
    fn test_reserved_letter_is_not_a_variable() {
        assert!(Variable::new('v').is_none());
        assert!(Variable::new('A').is_none());
        assert!(Variable::new('1').is_none());
        assert_eq!(Variable::new('w').map(Variable::letter), Some('w'));
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::from_symbol('^'), Some(Operator::And));
        assert_eq!(Operator::from_symbol('v'), Some(Operator::Or));
        assert_eq!(Operator::from_symbol('>'), Some(Operator::Implies));
        assert_eq!(Operator::from_symbol('-'), Some(Operator::Biconditional));
        assert_eq!(Operator::from_symbol('~'), None);
        assert_eq!(Operator::Biconditional.display_token(), "<->");
    }

    #[test]
    fn test_negate_toggles() {
        let node = Node::leaf(var('a'));
        assert!(!node.is_negated());
        let node = node.negate();
        assert!(node.is_negated());
        assert!(!node.negate().is_negated());
    }

    #[test]
    fn test_variables_and_size() {
        let tree = Node::binary(
            Operator::Or,
            Node::binary(Operator::And, Node::leaf(var('c')), Node::leaf(var('a'))),
            Node::leaf(var('c')),
        );
        let vars: Vec<char> = tree.variables().into_iter().map(Variable::letter).collect();
        assert_eq!(vars, vec!['a', 'c']);
        assert_eq!(tree.size(), 5);
    }
}

//! Parsing of normalized expressions into trees
//!
//! The parser makes a single left-to-right pass over one nesting level and
//! recurses into each parenthesized group. Operators on the same level are
//! folded strictly left to right; there is no precedence, so `a v b ^ c`
//! means `(a v b) ^ c`.

use super::ast::{Node, Operator, Variable};
use super::error::ParseError;
use super::normalizer::normalize;
use super::Expression;
use log::debug;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Deepest tree the parser will build
///
/// Counts both parenthesis nesting and the left-deep chains produced by
/// folding operators on one level. Evaluation, display and drop all recurse
/// over the tree, so this bounds their stack use.
pub const MAX_NESTING_DEPTH: usize = 256;

impl Expression {
    /// Parse an expression from a string
    ///
    /// Accepts single-letter variables (any lowercase letter except `v`),
    /// parentheses, and these operators:
    /// - `^`, `&&` or `and` for AND
    /// - `v`, `||` or `or` for OR
    /// - `~`, `!` or `not` for NOT
    /// - `->` for IMPLIES
    /// - `<->` for BICONDITIONAL
    ///
    /// # Examples
    ///
    /// ```
    /// use proptable::Expression;
    ///
    /// let expr = Expression::parse("a and (b or not c)").unwrap();
    /// assert_eq!(expr.to_string(), "a ^ (b v ~c)");
    /// assert_eq!(expr.variables().len(), 3);
    ///
    /// assert!(Expression::parse("a ^ (b v c").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let normalized = normalize(input);
        let mut parser = Parser::new(&normalized);
        parser.validate()?;
        let (root, _) = parser.parse_range(0, normalized.len())?;
        let variables: Vec<Variable> = parser.variables.into_iter().collect();
        debug!(
            "parsed {:?} into {} nodes over {} variables",
            normalized,
            root.size(),
            variables.len()
        );
        Ok(Expression { root, variables })
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

struct Parser<'a> {
    source: &'a str,
    variables: BTreeSet<Variable>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Parser {
            source,
            variables: BTreeSet::new(),
        }
    }

    /// Reject input the scanner would otherwise silently skip over
    fn validate(&self) -> Result<(), ParseError> {
        if self.source.trim().is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let mut depth = 0usize;
        let mut chars = self.source.char_indices().peekable();
        while let Some((position, character)) = chars.next() {
            match character {
                '~' => match chars.peek() {
                    Some(&(_, next)) if next == '(' || Variable::is_valid(next) => {}
                    _ => return Err(ParseError::DanglingNegation { position }),
                },
                '(' => {
                    depth += 1;
                    if depth > MAX_NESTING_DEPTH {
                        return Err(ParseError::NestingTooDeep { position });
                    }
                }
                ')' => depth = depth.saturating_sub(1),
                c if Operator::from_symbol(c).is_some() => {}
                c if Variable::is_valid(c) || c.is_ascii_whitespace() => {}
                c => {
                    return Err(ParseError::UnsupportedCharacter {
                        character: c,
                        position,
                    })
                }
            }
        }
        Ok(())
    }

    fn negated_at(&self, position: usize) -> bool {
        position > 0 && self.source.as_bytes()[position - 1] == b'~'
    }

    /// Parse `source[start..end]` as one nesting level, returning the tree
    /// and its depth
    ///
    /// Only called after `validate`, so every byte is ASCII and groups nest at
    /// most `MAX_NESTING_DEPTH` deep.
    fn parse_range(&mut self, start: usize, end: usize) -> Result<(Node, usize), ParseError> {
        let mut level = Level::default();
        let mut depth = 0usize;
        let mut group_start = start;

        for position in start..end {
            let byte = self.source.as_bytes()[position];
            match byte {
                b'(' => {
                    if depth == 0 {
                        group_start = position + 1;
                    }
                    depth += 1;
                }
                b')' => {
                    if depth == 0 {
                        return Err(ParseError::UnbalancedParentheses { position });
                    }
                    depth -= 1;
                    if depth == 0 {
                        let open = group_start - 1;
                        let (mut group, group_depth) = self.parse_range(group_start, position)?;
                        if self.negated_at(open) {
                            group = group.negate();
                        }
                        level.push_operand(group, group_depth, open)?;
                    }
                }
                _ if depth > 0 => {}
                // consumed by the operand that follows
                b'~' => {}
                b if b.is_ascii_whitespace() => {}
                b => {
                    let symbol = b as char;
                    if let Some(operator) = Operator::from_symbol(symbol) {
                        level.push_operator(operator, position)?;
                    } else if let Some(variable) = Variable::new(symbol) {
                        self.variables.insert(variable);
                        let mut leaf = Node::leaf(variable);
                        if self.negated_at(position) {
                            leaf = leaf.negate();
                        }
                        level.push_operand(leaf, 1, position)?;
                    } else {
                        return Err(ParseError::UnsupportedCharacter {
                            character: symbol,
                            position,
                        });
                    }
                }
            }
        }

        if depth != 0 {
            return Err(ParseError::UnbalancedParentheses {
                position: group_start - 1,
            });
        }
        level.finish()
    }
}

/// Fold state for one nesting level
///
/// Holds `left <pending> right`. A new operator reduces the triple into a
/// fresh left operand before taking its place. Operands carry their tree
/// depth.
#[derive(Default)]
struct Level {
    left: Option<(Node, usize)>,
    pending: Option<(Operator, usize)>,
    right: Option<(Node, usize)>,
}

impl Level {
    fn push_operand(
        &mut self,
        node: Node,
        depth: usize,
        position: usize,
    ) -> Result<(), ParseError> {
        let slot = if self.pending.is_some() {
            &mut self.right
        } else {
            &mut self.left
        };
        if slot.is_some() {
            return Err(ParseError::UnexpectedOperand { position });
        }
        *slot = Some((node, depth));
        Ok(())
    }

    fn push_operator(&mut self, operator: Operator, position: usize) -> Result<(), ParseError> {
        match self.pending.take() {
            Some(pending) => {
                let folded = self.reduce(pending)?;
                self.left = Some(folded);
            }
            None if self.left.is_none() => {
                return Err(ParseError::MissingOperand { position });
            }
            None => {}
        }
        self.pending = Some((operator, position));
        Ok(())
    }

    fn reduce(
        &mut self,
        (operator, position): (Operator, usize),
    ) -> Result<(Node, usize), ParseError> {
        let missing = ParseError::MissingOperand { position };
        let (left, left_depth) = self.left.take().ok_or(missing.clone())?;
        let (right, right_depth) = self.right.take().ok_or(missing)?;
        let depth = left_depth.max(right_depth) + 1;
        if depth > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { position });
        }
        Ok((Node::binary(operator, left, right), depth))
    }

    /// With no operator on this level the lone operand is the result, which
    /// unwraps fully parenthesized input and keeps a bare variable as a leaf.
    fn finish(mut self) -> Result<(Node, usize), ParseError> {
        match self.pending.take() {
            Some(pending) => self.reduce(pending),
            None => self.left.ok_or(ParseError::EmptyExpression),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn var(letter: char) -> Variable {
        Variable::new(letter).unwrap()
    }

    fn leaf(letter: char) -> Node {
        Node::leaf(var(letter))
    }

    #[test]
    fn test_single_operator() {
        let expr = Expression::parse("a ^ b").unwrap();
        assert_eq!(expr.root(), &Node::binary(Operator::And, leaf('a'), leaf('b')));
        assert_eq!(expr.variables(), &[var('a'), var('b')]);
    }

    #[test]
    fn test_left_fold_without_precedence() {
        let expr = Expression::parse("a v b ^ c").unwrap();
        let expected = Node::binary(
            Operator::And,
            Node::binary(Operator::Or, leaf('a'), leaf('b')),
            leaf('c'),
        );
        assert_eq!(expr.root(), &expected);
    }

    #[test]
    fn test_parenthesized_right_operand() {
        let expr = Expression::parse("a ^ (b v c)").unwrap();
        let expected = Node::binary(
            Operator::And,
            leaf('a'),
            Node::binary(Operator::Or, leaf('b'), leaf('c')),
        );
        assert_eq!(expr.root(), &expected);
    }

    #[test]
    fn test_negated_group_and_leaf() {
        let expr = Expression::parse("~(a ^ b) > ~c").unwrap();
        let expected = Node::binary(
            Operator::Implies,
            Node::binary(Operator::And, leaf('a'), leaf('b')).negate(),
            leaf('c').negate(),
        );
        assert_eq!(expr.root(), &expected);
    }

    #[test]
    fn test_fully_parenthesized_is_unwrapped() {
        let expr = Expression::parse("((a - b))").unwrap();
        assert_eq!(
            expr.root(),
            &Node::binary(Operator::Biconditional, leaf('a'), leaf('b'))
        );

        let negated = Expression::parse("~(a ^ b)").unwrap();
        assert!(negated.root().is_negated());
    }

    #[test]
    fn test_double_negated_group_cancels() {
        let expr = Expression::parse("~(~(a ^ b))").unwrap();
        assert!(!expr.root().is_negated());
    }

    #[test]
    fn test_bare_variable_is_leaf() {
        let expr = Expression::parse("~q").unwrap();
        assert_eq!(expr.root(), &leaf('q').negate());
        assert_eq!(expr.variables(), &[var('q')]);
    }

    #[test]
    fn test_variables_sorted_and_unique() {
        let expr = Expression::parse("z ^ (a v (m ^ a)) ^ z").unwrap();
        assert_eq!(expr.variables(), &[var('a'), var('m'), var('z')]);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let spaced = Expression::parse("  a   ^   ( b v c )  ").unwrap();
        let compact = Expression::parse("a^(bvc)").unwrap();
        assert_eq!(spaced, compact);
    }

    #[test]
    fn test_unclosed_parenthesis() {
        assert_eq!(
            Expression::parse("a ^ (b v c"),
            Err(ParseError::UnbalancedParentheses { position: 4 })
        );
    }

    #[test]
    fn test_unopened_parenthesis() {
        assert_eq!(
            Expression::parse("a ^ b) v c"),
            Err(ParseError::UnbalancedParentheses { position: 5 })
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Expression::parse(""), Err(ParseError::EmptyExpression));
        assert_eq!(Expression::parse("   "), Err(ParseError::EmptyExpression));
        assert_eq!(Expression::parse("a ^ ()"), Err(ParseError::EmptyExpression));
    }

    #[test]
    fn test_unsupported_characters() {
        assert_eq!(
            Expression::parse("a + b"),
            Err(ParseError::UnsupportedCharacter {
                character: '+',
                position: 2
            })
        );
        assert!(matches!(
            Expression::parse("A ^ b"),
            Err(ParseError::UnsupportedCharacter { character: 'A', .. })
        ));
    }

    #[test]
    fn test_dangling_negation() {
        assert_eq!(
            Expression::parse("a ^ ~ b"),
            Err(ParseError::DanglingNegation { position: 4 })
        );
        assert_eq!(
            Expression::parse("~~a"),
            Err(ParseError::DanglingNegation { position: 0 })
        );
    }

    #[test]
    fn test_missing_operands() {
        assert_eq!(
            Expression::parse("a ^"),
            Err(ParseError::MissingOperand { position: 2 })
        );
        assert_eq!(
            Expression::parse("^ a"),
            Err(ParseError::MissingOperand { position: 0 })
        );
        assert_eq!(
            Expression::parse("a ^ v b"),
            Err(ParseError::MissingOperand { position: 2 })
        );
    }

    #[test]
    fn test_adjacent_operands() {
        assert_eq!(
            Expression::parse("a b"),
            Err(ParseError::UnexpectedOperand { position: 2 })
        );
        assert_eq!(
            Expression::parse("a ^ b (c)"),
            Err(ParseError::UnexpectedOperand { position: 6 })
        );
    }

    fn nested(depth: usize) -> String {
        format!("{}a ^ b{}", "(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn test_deep_parentheses_are_rejected() {
        assert_eq!(
            Expression::parse(&nested(50_000)),
            Err(ParseError::NestingTooDeep {
                position: MAX_NESTING_DEPTH
            })
        );
        assert_eq!(
            Expression::parse(&nested(MAX_NESTING_DEPTH + 1)),
            Err(ParseError::NestingTooDeep {
                position: MAX_NESTING_DEPTH
            })
        );
        let expr = Expression::parse(&nested(MAX_NESTING_DEPTH)).unwrap();
        assert_eq!(expr.to_string(), "a ^ b");
    }

    #[test]
    fn test_long_operator_chain_is_rejected() {
        // n operators fold into a tree n + 1 levels deep
        let chain = |operators: usize| vec!["a"; operators + 1].join(" ^ ");

        let expr = Expression::parse(&chain(MAX_NESTING_DEPTH - 1)).unwrap();
        assert_eq!(expr.root().size(), 2 * MAX_NESTING_DEPTH - 1);

        // the last operator sits at 4 * (n - 1) + 2
        assert_eq!(
            Expression::parse(&chain(MAX_NESTING_DEPTH)),
            Err(ParseError::NestingTooDeep {
                position: 4 * (MAX_NESTING_DEPTH - 1) + 2
            })
        );
    }

    #[test]
    fn test_groups_add_to_chain_depth() {
        let inner = vec!["a"; MAX_NESTING_DEPTH].join(" ^ ");
        assert!(Expression::parse(&inner).is_ok());
        assert!(matches!(
            Expression::parse(&format!("b ^ ({})", inner)),
            Err(ParseError::NestingTooDeep { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let expr: Expression = "p -> q".parse().unwrap();
        assert_eq!(expr.to_string(), "p -> q");
    }
}

//! Truth table synthesis
//!
//! A table has one row per assignment of the expression's variables and one
//! column per distinct label among:
//! - the variables themselves,
//! - every negated node of the tree (negated leaves such as `~a` included),
//! - the whole expression.
//!
//! Non-negated intermediate nodes get no column of their own.

mod render;

use crate::error::Error;
use crate::expression::{Assignment, EvalError, Expression, Node, Variable};
use crate::TableConfig;
use log::{debug, error, trace};
use std::collections::{HashMap, HashSet};

/// The value of one labelled sub-expression under one assignment
///
/// `assignment` only covers the variables the sub-expression refers to, so
/// rows that agree on those variables produce equal records and collapse
/// into one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluationRecord {
    pub display_text: String,
    pub assignment: Assignment,
    pub value: bool,
}

/// One printed row: a full assignment and a value per column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    assignment: Assignment,
    values: Vec<Option<bool>>,
}

impl Row {
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Column values in column order; `None` when no record covers the cell
    pub fn values(&self) -> &[Option<bool>] {
        &self.values
    }
}

/// Enumerate all `2^n` assignments of `variables` in table order
///
/// For row number `value`, the variable at index `i` is `true` exactly when
/// bit `n - i - 1` of `value` is **clear**, so the first row is all-true and
/// the last row all-false.
///
/// # Examples
///
/// ```
/// use proptable::{assignments, Variable};
///
/// let vars = [Variable::new('a').unwrap(), Variable::new('b').unwrap()];
/// let rows: Vec<Vec<bool>> = assignments(&vars)
///     .map(|row| row.values().copied().collect())
///     .collect();
/// assert_eq!(
///     rows,
///     vec![
///         vec![true, true],
///         vec![true, false],
///         vec![false, true],
///         vec![false, false],
///     ]
/// );
/// ```
pub fn assignments(variables: &[Variable]) -> impl Iterator<Item = Assignment> + '_ {
    let count = variables.len();
    (0..1u64 << count).map(move |value| {
        variables
            .iter()
            .enumerate()
            .map(|(index, &variable)| {
                let power = count - index - 1;
                (variable, (value >> power) & 1 == 0)
            })
            .collect()
    })
}

/// A rendered-ready truth table
///
/// Built by [`Expression::build_truth_table`]. Immutable, and safe to share
/// between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<Variable>,
    columns: Vec<String>,
    rows: Vec<Row>,
    records: Vec<EvaluationRecord>,
    root_column: usize,
}

impl TruthTable {
    fn synthesize(expression: &Expression) -> Result<Self, EvalError> {
        let variables = expression.variables();
        let root = expression.root();
        let root_label = root.to_string();
        debug!(
            "building truth table for {:?}: {} variables, {} rows",
            root_label,
            variables.len(),
            1u64 << variables.len()
        );

        let mut records = RecordSet::default();
        let mut cells = Cells::default();
        let row_assignments: Vec<Assignment> = assignments(variables).collect();

        for assignment in &row_assignments {
            cells.start_row();
            for (&variable, &value) in assignment {
                let record = EvaluationRecord {
                    display_text: variable.to_string(),
                    assignment: Assignment::from([(variable, value)]),
                    value,
                };
                cells.fill(&record);
                records.insert(record);
            }

            let mut negated = Vec::new();
            let value = root
                .evaluate_observed(assignment, &mut |node, value| {
                    if node.is_negated() {
                        negated.push(record_for(node, assignment, value));
                    }
                })
                .map_err(|err| {
                    error!("incomplete assignment {:?}: {}", assignment, err);
                    err
                })?;
            for record in negated {
                cells.fill(&record);
                records.insert(record);
            }

            let record = EvaluationRecord {
                display_text: root_label.clone(),
                assignment: assignment.clone(),
                value,
            };
            cells.fill(&record);
            records.insert(record);
            trace!("row {:?} -> {}", assignment, value);
        }

        let records = records.into_vec();
        let columns = order_columns(&records);
        let root_column = columns
            .iter()
            .position(|label| *label == root_label)
            .unwrap_or(columns.len().saturating_sub(1));

        let rows: Vec<Row> = row_assignments
            .into_iter()
            .zip(cells.rows)
            .map(|(assignment, seen)| {
                let values = columns
                    .iter()
                    .map(|label| {
                        cells
                            .labels
                            .get(label.as_str())
                            .and_then(|&slot| seen.get(slot).copied().flatten())
                    })
                    .collect();
                Row { assignment, values }
            })
            .collect();

        debug!(
            "truth table has {} columns from {} distinct records",
            columns.len(),
            records.len()
        );

        Ok(TruthTable {
            variables: variables.to_vec(),
            columns,
            rows,
            records,
            root_column,
        })
    }

    /// Variables of the source expression, in ascending order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Column labels, shortest first
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The deduplicated records the table was assembled from
    pub fn records(&self) -> &[EvaluationRecord] {
        &self.records
    }

    /// Index of the column holding the whole expression
    pub fn root_column(&self) -> usize {
        self.root_column
    }

    /// Value at `row` for the column labelled `label`
    pub fn value(&self, row: usize, label: &str) -> Option<bool> {
        let column = self.columns.iter().position(|c| c == label)?;
        self.rows.get(row)?.values[column]
    }

    /// The whole expression's value in every row
    pub fn results(&self) -> impl Iterator<Item = Option<bool>> + '_ {
        self.rows.iter().map(move |row| row.values[self.root_column])
    }

    /// True when the expression holds under every assignment
    pub fn is_tautology(&self) -> bool {
        self.results().all(|value| value == Some(true))
    }

    /// True when the expression fails under every assignment
    pub fn is_contradiction(&self) -> bool {
        self.results().all(|value| value == Some(false))
    }
}

fn record_for(node: &Node, row: &Assignment, value: bool) -> EvaluationRecord {
    let assignment = node
        .variables()
        .into_iter()
        .filter_map(|variable| row.get(&variable).map(|&v| (variable, v)))
        .collect();
    EvaluationRecord {
        display_text: node.to_string(),
        assignment,
        value,
    }
}

/// Distinct labels in first-seen order, then stably sorted by length
fn order_columns(records: &[EvaluationRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns: Vec<String> = records
        .iter()
        .filter(|record| seen.insert(record.display_text.as_str()))
        .map(|record| record.display_text.clone())
        .collect();
    columns.sort_by_key(|label| label.chars().count());
    columns
}

/// Insertion-ordered set of records
#[derive(Default)]
struct RecordSet {
    seen: HashSet<EvaluationRecord>,
    ordered: Vec<EvaluationRecord>,
}

impl RecordSet {
    fn insert(&mut self, record: EvaluationRecord) {
        if self.seen.insert(record.clone()) {
            self.ordered.push(record);
        }
    }

    fn into_vec(self) -> Vec<EvaluationRecord> {
        self.ordered
    }
}

/// Per-row cell values, indexed by the order labels were first seen
///
/// Filled while rows are evaluated so that assembling the table never has to
/// search the records again.
#[derive(Default)]
struct Cells {
    labels: HashMap<String, usize>,
    rows: Vec<Vec<Option<bool>>>,
}

impl Cells {
    fn start_row(&mut self) {
        self.rows.push(vec![None; self.labels.len()]);
    }

    fn fill(&mut self, record: &EvaluationRecord) {
        let slot = match self.labels.get(record.display_text.as_str()) {
            Some(&slot) => slot,
            None => {
                let slot = self.labels.len();
                self.labels.insert(record.display_text.clone(), slot);
                slot
            }
        };
        if let Some(row) = self.rows.last_mut() {
            if row.len() <= slot {
                row.resize(slot + 1, None);
            }
            row[slot] = Some(record.value);
        }
    }
}

impl Expression {
    /// Build the truth table of this expression
    ///
    /// Enumerates all `2^n` assignments, so the cost doubles with every
    /// variable. Use [`Expression::build_truth_table_with`] to cap `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use proptable::Expression;
    ///
    /// let table = Expression::parse("a ^ b").unwrap().build_truth_table().unwrap();
    /// assert_eq!(table.columns(), ["a", "b", "a ^ b"]);
    /// assert_eq!(table.num_rows(), 4);
    /// assert_eq!(table.value(0, "a ^ b"), Some(true));
    /// assert_eq!(table.value(1, "a ^ b"), Some(false));
    /// ```
    pub fn build_truth_table(&self) -> Result<TruthTable, EvalError> {
        TruthTable::synthesize(self)
    }

    /// Build the truth table, refusing expressions with more variables than
    /// `config.max_variables`
    pub fn build_truth_table_with(&self, config: &TableConfig) -> Result<TruthTable, Error> {
        let count = self.variables().len();
        if count > config.max_variables {
            return Err(Error::VariableLimit {
                count,
                limit: config.max_variables,
            });
        }
        Ok(self.build_truth_table()?)
    }
}

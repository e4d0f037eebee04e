//! Delivering truth tables as chat replies
//!
//! Small tables go inline inside a fenced code block. Tables that would
//! overflow a message, or whose columns are too wide to read in a chat
//! client, are written to a temporary text file instead; the file is removed
//! when the [`Delivery`] is dropped, i.e. once the reply has been sent.

use crate::error::Error;
use crate::expression::{Expression, ParseError};
use crate::table::TruthTable;
use crate::TableConfig;
use log::{debug, warn};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Size limits imposed by the message transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryLimits {
    /// Longest message, fences included, that may be sent inline
    ///
    /// **Default:** `2000`
    pub max_message_len: usize,

    /// Widest column that is still readable inline
    ///
    /// **Default:** `140`
    pub max_column_width: usize,
}

impl Default for DeliveryLimits {
    fn default() -> Self {
        DeliveryLimits {
            max_message_len: 2000,
            max_column_width: 140,
        }
    }
}

/// A reply ready to be sent
#[derive(Debug)]
pub enum Delivery {
    /// The whole table as a fenced code block
    Inline(String),
    /// A short notice plus a file holding the rendered table
    Attachment { notice: String, file: NamedTempFile },
}

impl Delivery {
    pub fn is_inline(&self) -> bool {
        matches!(self, Delivery::Inline(_))
    }

    /// Text of the message itself
    pub fn text(&self) -> &str {
        match self {
            Delivery::Inline(message) => message,
            Delivery::Attachment { notice, .. } => notice,
        }
    }

    /// Location of the file to attach, if any
    pub fn attachment_path(&self) -> Option<&Path> {
        match self {
            Delivery::Inline(_) => None,
            Delivery::Attachment { file, .. } => Some(file.path()),
        }
    }
}

/// Wrap rendered lines in a fenced code block
pub fn fenced(lines: &[String]) -> String {
    format!("```\n{}\n```", lines.join("\n"))
}

/// Decide how to send `table` and prepare the reply
pub fn prepare_reply(table: &TruthTable, limits: &DeliveryLimits) -> io::Result<Delivery> {
    let lines = table.render_lines();
    let message = fenced(&lines);

    let too_long = message.chars().count() > limits.max_message_len;
    let too_wide = table
        .column_widths()
        .iter()
        .any(|&width| width > limits.max_column_width);
    if !too_long && !too_wide {
        return Ok(Delivery::Inline(message));
    }

    let mut file = tempfile::Builder::new()
        .prefix("truth-table-")
        .suffix(".txt")
        .tempfile()?;
    writeln!(file, "{}", lines.join("\n"))?;
    file.flush()?;
    debug!(
        "table of {} chars sent as attachment {}",
        message.len(),
        file.path().display()
    );

    let label = table
        .columns()
        .get(table.root_column())
        .map(String::as_str)
        .unwrap_or_default();
    let notice = format!(
        "The truth table for `{}` is too large to show here, see the attached file.",
        label
    );
    Ok(Delivery::Attachment { notice, file })
}

/// Short text suitable for showing an end user
pub fn user_message(err: &Error) -> String {
    match err {
        Error::Parse(ParseError::EmptyExpression) => "Please provide an expression.".to_string(),
        Error::Parse(ParseError::UnbalancedParentheses { .. }) => {
            "The parentheses in that expression are unbalanced.".to_string()
        }
        Error::Parse(other) => format!("That is not a valid expression: {}.", other),
        Error::VariableLimit { count, limit } => format!(
            "That expression has {} variables; the limit is {}.",
            count, limit
        ),
        Error::Eval(_) | Error::Io(_) => {
            warn!("internal failure while building reply: {}", err);
            "Something went wrong while building the truth table.".to_string()
        }
    }
}

/// Parse, tabulate and package an expression in one go
///
/// # Examples
///
/// ```
/// use proptable::report::{reply, DeliveryLimits};
/// use proptable::TableConfig;
///
/// let delivery = reply("a ^ b", &TableConfig::default(), &DeliveryLimits::default()).unwrap();
/// assert!(delivery.is_inline());
/// assert!(delivery.text().starts_with("```\n a | b | a ^ b \n"));
/// ```
pub fn reply(
    expression: &str,
    config: &TableConfig,
    limits: &DeliveryLimits,
) -> Result<Delivery, Error> {
    let expression = Expression::parse(expression)?;
    let table = expression.build_truth_table_with(config)?;
    Ok(prepare_reply(&table, limits)?)
}

//! Fixed-width text rendering of truth tables

use super::TruthTable;
use std::fmt;

impl TruthTable {
    /// Printed width of each column: the label plus a space on either side
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .map(|label| label.chars().count() + 2)
            .collect()
    }

    /// Render the table, one string per printed line
    ///
    /// The first line holds the centered column labels, the second a `-`/`+`
    /// rule, then one line per assignment with `T`, `F`, or `-` for a cell no
    /// record covers.
    ///
    /// # Examples
    ///
    /// ```
    /// use proptable::Expression;
    ///
    /// let table = Expression::parse("a v b").unwrap().build_truth_table().unwrap();
    /// assert_eq!(
    ///     table.render_lines(),
    ///     vec![
    ///         " a | b | a v b ",
    ///         "---+---+-------",
    ///         " T | T |   T   ",
    ///         " T | F |   T   ",
    ///         " F | T |   T   ",
    ///         " F | F |   F   ",
    ///     ]
    /// );
    /// ```
    pub fn render_lines(&self) -> Vec<String> {
        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        lines.push(join_cells(
            self.columns.iter().map(String::as_str),
            &widths,
            "|",
        ));
        lines.push(
            widths
                .iter()
                .map(|&width| "-".repeat(width))
                .collect::<Vec<_>>()
                .join("+"),
        );
        for row in &self.rows {
            lines.push(join_cells(row.values.iter().map(|v| cell(*v)), &widths, "|"));
        }
        lines
    }
}

fn cell(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "T",
        Some(false) => "F",
        None => "-",
    }
}

fn join_cells<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    separator: &str,
) -> String {
    cells
        .zip(widths)
        .map(|(text, &width)| format!("{:^width$}", text, width = width))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Lines from [`TruthTable::render_lines`] joined by newlines
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use crate::Expression;

    fn render(input: &str) -> Vec<String> {
        Expression::parse(input)
            .unwrap()
            .build_truth_table()
            .unwrap()
            .render_lines()
    }

    #[test]
    fn test_header_and_rule() {
        let lines = render("~(a ^ b)");
        assert_eq!(lines[0], " a | b | ~(a ^ b) ");
        assert_eq!(lines[1], "---+---+----------");
        assert_eq!(lines.len(), 2 + 4);
    }

    #[test]
    fn test_cells_are_centered() {
        let lines = render("p -> q");
        assert_eq!(lines[2], " T | T |   T    ");
        assert_eq!(lines[3], " T | F |   F    ");
    }

    #[test]
    fn test_all_lines_same_width() {
        let lines = render("(a - b) ^ ~(c v d)");
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_display_joins_lines() {
        let table = Expression::parse("a ^ b")
            .unwrap()
            .build_truth_table()
            .unwrap();
        let text = table.to_string();
        assert_eq!(text.lines().count(), 6);
        assert!(!text.ends_with('\n'));
    }
}

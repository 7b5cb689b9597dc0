//! Rendering a normalized table back into bordered grid-table lines.
//!
//! Output shape:
//!
//! ```text
//! +=====+=====+
//! | foo | bar |
//! | baz |     |
//! +=====+=====+
//! | x   | y   |
//! ```
//!
//! The rule above and below the first row is drawn with `=` (the header
//! framing); rules between later rows use `-`. No rule follows the last
//! row. The asymmetric framing is part of the output contract; reparsing
//! drops rules anyway, so reformats stay stable.

use unicode_width::UnicodeWidthStr;

use crate::table::Table;

/// Fill character family for a horizontal rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RuleKind {
    /// `=` fill, framing the header row.
    Header,
    /// `-` fill, separating body rows.
    Body,
}

impl RuleKind {
    fn fill(self) -> char {
        match self {
            RuleKind::Header => '=',
            RuleKind::Body => '-',
        }
    }
}

/// Rendered width of one cell: the display width of its longest embedded
/// line. An empty cell has width zero.
pub fn cell_width(cell: &str) -> usize {
    cell.split('\n').map(|line| line.width()).max().unwrap_or(0)
}

/// Maximum rendered width per column across all rows.
///
/// Rows are normally equalized before this runs, but the accumulator
/// still grows as wider rows are observed so ragged input cannot index
/// out of bounds.
pub fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths = Vec::new();
    for row in table.rows() {
        if widths.len() < row.len() {
            widths.resize(row.len(), 0);
        }
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell_width(cell));
        }
    }
    widths
}

/// Draws a horizontal rule: `+` at every column boundary, each segment
/// filled to the column width plus one padding space per side. Zero
/// columns produce an empty string.
fn rule_line(widths: &[usize], kind: RuleKind) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let mut line = String::from("+");
    for &width in widths {
        line.extend(std::iter::repeat_n(kind.fill(), width + 2));
        line.push('+');
    }
    line
}

/// Splits a row's cells into the visual lines of the rendered row block.
///
/// The row's height is the largest embedded-line count among its cells;
/// cells with fewer lines contribute empty strings for the remainder. A
/// row with no cells has height zero.
fn row_sublines(row: &[String]) -> Vec<Vec<&str>> {
    let cells: Vec<Vec<&str>> = row.iter().map(|cell| cell.split('\n').collect()).collect();
    let height = cells.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|i| {
            cells
                .iter()
                .map(|lines| lines.get(i).copied().unwrap_or(""))
                .collect()
        })
        .collect()
}

/// Renders one visual line of a row: every cell trimmed, padded to its
/// column width with a space either side, joined and bordered by `|`.
fn data_line(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, cell) in cells.iter().enumerate() {
        let text = cell.trim();
        let width = widths.get(i).copied().unwrap_or(0);
        line.push(' ');
        line.push_str(text);
        line.extend(std::iter::repeat_n(' ', width.saturating_sub(text.width())));
        line.push_str(" |");
    }
    line
}

/// Renders a normalized table as bordered grid-table lines.
///
/// An empty table renders as no lines at all. Otherwise: header rule,
/// first row, header rule again, then each further row followed by a
/// body rule, except the last row, which ends the output.
pub fn render_table(table: &Table) -> Vec<String> {
    if table.is_empty() {
        return Vec::new();
    }

    let widths = column_widths(table);
    let header_rule = rule_line(&widths, RuleKind::Header);
    let body_rule = rule_line(&widths, RuleKind::Body);

    let rows = table.rows();
    let mut output = vec![header_rule.clone()];
    for (index, row) in rows.iter().enumerate() {
        for sublines in row_sublines(row) {
            output.push(data_line(&sublines, &widths));
        }
        if index == 0 {
            output.push(header_rule.clone());
        } else if index + 1 < rows.len() {
            output.push(body_rule.clone());
        }
    }
    output
}

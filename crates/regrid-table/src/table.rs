//! The table model: joining logical rows into cells and normalizing the
//! result so every row has the same shape.

use crate::row::{group_rows, split_fields};

/// A parsed, normalized table.
///
/// Every row holds the same number of cells: construction pads ragged
/// rows with empty cells up to the widest row, then removes columns that
/// are blank in every row. Cells may contain embedded newlines when the
/// input spelled a row across several raw lines.
///
/// A `Table` lives for one reformat: parse, render, discard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table from raw rows, normalizing as it goes.
    ///
    /// Rows shorter than the longest are padded with empty cells; columns
    /// whose cells are blank (after trimming) in every row are dropped.
    /// Row order and the relative order of surviving columns are
    /// preserved.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(max_cols, String::new());
        }

        let keep: Vec<bool> = (0..max_cols)
            .map(|col| rows.iter().any(|row| !row[col].trim().is_empty()))
            .collect();

        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&keep)
                    .filter(|(_, &kept)| kept)
                    .map(|(cell, _)| cell)
                    .collect()
            })
            .collect();

        Table { rows }
    }

    /// True when the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells per row. Zero for an empty table, and possibly
    /// zero for a non-empty table whose every column was blank.
    pub fn num_columns(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Merges the raw lines of one logical row into per-column cell texts.
///
/// Each line is split into fields, then fields are gathered column-wise:
/// the cell for column `i` is the newline-join of every line's non-blank
/// trimmed field at index `i`, in order. Blank fields contribute nothing,
/// so a line that only fills some columns leaves the others untouched
/// rather than inserting empty cell lines.
fn merge_row_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut columns: Vec<Vec<String>> = Vec::new();
    for line in lines {
        let fields = split_fields(line.as_ref());
        if columns.len() < fields.len() {
            columns.resize_with(fields.len(), Vec::new);
        }
        for (i, field) in fields.iter().enumerate() {
            let text = field.trim();
            if !text.is_empty() {
                columns[i].push(text.to_string());
            }
        }
    }
    columns.into_iter().map(|parts| parts.join("\n")).collect()
}

/// Parses a block of raw lines into a normalized [`Table`].
///
/// This is the whole read side of the pipeline: partition the lines into
/// logical rows, merge each partition into cells, normalize. Any input is
/// accepted; irregular tables come out padded and pruned rather than
/// rejected.
pub fn parse_table<S: AsRef<str>>(lines: &[S]) -> Table {
    let rows = group_rows(lines)
        .iter()
        .map(|partition| merge_row_lines(partition))
        .collect();
    Table::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(row: &[&str]) -> Vec<String> {
        row.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn merge_single_line() {
        assert_eq!(merge_row_lines(&["a | b"]), vec!["a", "b"]);
    }

    #[test]
    fn merge_joins_columns_with_newlines() {
        assert_eq!(
            merge_row_lines(&["foo | bar", "baz | qux"]),
            vec!["foo\nbaz", "bar\nqux"]
        );
    }

    #[test]
    fn merge_skips_blank_fields() {
        // The second line only continues the first column; the second
        // column must not grow an empty trailing line.
        assert_eq!(merge_row_lines(&["foo | bar", "baz |"]), vec!["foo\nbaz", "bar"]);
    }

    #[test]
    fn merge_short_lines_leave_missing_columns_alone() {
        assert_eq!(
            merge_row_lines(&["a | b | c", "x"]),
            vec!["a\nx", "b", "c"]
        );
    }

    #[test]
    fn normalize_pads_ragged_rows() {
        let table = Table::from_rows(vec![cells(&["a", "b"]), cells(&["c"])]);
        assert_eq!(table.rows(), &[cells(&["a", "b"]), cells(&["c", ""])]);
    }

    #[test]
    fn normalize_drops_all_blank_columns() {
        let table = Table::from_rows(vec![cells(&["a", " ", "c"]), cells(&["d", "", "e"])]);
        assert_eq!(table.rows(), &[cells(&["a", "c"]), cells(&["d", "e"])]);
        assert_eq!(table.num_columns(), 2);
    }

    #[test]
    fn normalize_keeps_column_with_any_content() {
        let table = Table::from_rows(vec![cells(&["a", ""]), cells(&["b", "x"])]);
        assert_eq!(table.rows(), &[cells(&["a", ""]), cells(&["b", "x"])]);
    }

    #[test]
    fn normalize_empty_input() {
        let table = Table::from_rows(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.num_columns(), 0);
    }

    #[test]
    fn parse_informal_table() {
        let table = parse_table(&["a  b", "cc  d"]);
        assert_eq!(table.rows(), &[cells(&["a", "b"]), cells(&["cc", "d"])]);
    }

    #[test]
    fn parse_multi_line_cells() {
        let table = parse_table(&["foo | bar", "baz |", "----+----", "x   | y"]);
        assert_eq!(
            table.rows(),
            &[cells(&["foo\nbaz", "bar"]), cells(&["x", "y"])]
        );
    }

    #[test]
    fn parse_gridded_table_round_trips_cells() {
        let table = parse_table(&[
            "+====+===+",
            "| a  | b |",
            "+====+===+",
            "| cc | d |",
        ]);
        assert_eq!(table.rows(), &[cells(&["a", "b"]), cells(&["cc", "d"])]);
    }

    #[test]
    fn parse_prunes_indentation_column() {
        // A uniformly indented informal table gains a phantom blank
        // first column from the leading gap; pruning removes it.
        let table = parse_table(&["  a  b", "  c  d"]);
        assert_eq!(table.rows(), &[cells(&["a", "b"]), cells(&["c", "d"])]);
    }

    #[test]
    fn parse_empty_block() {
        let lines: [&str; 0] = [];
        assert!(parse_table(&lines).is_empty());
    }

    #[test]
    fn parse_separator_only_block() {
        assert!(parse_table(&["+---+", "===="]).is_empty());
    }

    #[test]
    fn parse_single_undelimited_line() {
        let table = parse_table(&["hello world"]);
        assert_eq!(table.rows(), &[cells(&["hello world"])]);
    }
}

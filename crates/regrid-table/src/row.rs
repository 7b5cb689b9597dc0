//! Raw-line handling: field splitting and logical-row partitioning.
//!
//! Input tables arrive in one of two shapes. Gridded tables carry `|`
//! delimiters and horizontal rules built from `+`, `-`, and `=`; informal
//! tables separate columns with runs of two or more spaces and have no
//! rules at all. The functions here reduce both shapes to the same thing:
//! groups of raw lines, one group per logical table row.

use once_cell::sync::Lazy;
use regex::Regex;

/// A horizontal rule: only whitespace and border-drawing characters.
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\t +=-]+$").expect("valid regex"));

/// One leading and one trailing table border pipe.
static EDGE_PIPES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\||\|\s*$").expect("valid regex"));

/// A `|` delimiter with its surrounding whitespace.
static PIPE_DELIM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\|\s*").expect("valid regex"));

/// A column gap in informal input: two or more whitespace characters.
static COLUMN_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s\s+").expect("valid regex"));

/// Returns true if the line is a row separator.
///
/// A separator consists solely of characters from `{tab, space, +, =, -}`
/// and is non-empty after trimming. Blank lines are not separators; they
/// terminate the table block before parsing ever sees them.
pub fn is_separator_line(line: &str) -> bool {
    SEPARATOR.is_match(line.trim())
}

/// Splits one raw line into its field strings.
///
/// Lines containing a `|` are treated as pipe-delimited: a single border
/// pipe at each end is stripped, then the remainder splits on the
/// delimiters. Anything else splits on gaps of two or more whitespace
/// characters, so single spaces inside a field survive. Every line yields
/// at least one field, possibly empty.
///
/// Fields may retain incidental whitespace; the joining step trims them
/// and decides what blank fields mean.
pub fn split_fields(line: &str) -> Vec<String> {
    if line.contains('|') {
        let inner = EDGE_PIPES.replace_all(line, "");
        return PIPE_DELIM
            .split(inner.trim())
            .map(str::to_string)
            .collect();
    }
    COLUMN_GAP
        .split(line.trim_end())
        .map(str::to_string)
        .collect()
}

/// Groups raw lines into logical rows.
///
/// When the input contains no separator line, the table cannot have
/// multi-line cells and every line is its own row. When separators are
/// present they act as row boundaries: each group is a maximal run of
/// non-separator lines, the separators themselves are dropped, and empty
/// groups (leading, trailing, or consecutive separators) are discarded.
pub fn group_rows<S: AsRef<str>>(lines: &[S]) -> Vec<Vec<String>> {
    if !lines.iter().any(|line| is_separator_line(line.as_ref())) {
        return lines
            .iter()
            .map(|line| vec![line.as_ref().to_string()])
            .collect();
    }

    let mut groups = Vec::new();
    let mut current = Vec::new();
    for line in lines {
        if is_separator_line(line.as_ref()) {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.as_ref().to_string());
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

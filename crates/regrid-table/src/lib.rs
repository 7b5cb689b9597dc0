//! # regrid-table: grid-table parsing and rendering
//!
//! Turns loosely formatted plain-text tables into uniformly aligned
//! RST-style grid tables. Input may already be gridded (`+`/`-`/`=`
//! rules with `|` delimiters) or informal (columns separated by two or
//! more spaces); either way the same pipeline applies:
//!
//! 1. [`group_rows`]: partition raw lines into logical rows, using rule
//!    lines as boundaries when the input has them
//! 2. [`parse_table`]: merge each logical row into per-column cells
//!    (multi-line cells keep their lines, newline-joined) and normalize
//!    the result: ragged rows are padded, all-blank columns dropped
//! 3. [`render_table`]: draw the bordered grid with consistent column
//!    widths, a `=` rule framing the header row and `-` rules between
//!    body rows
//!
//! ```rust
//! use regrid_table::{parse_table, render_table};
//!
//! let table = parse_table(&["a  b", "cc  d"]);
//! assert_eq!(
//!     render_table(&table),
//!     vec![
//!         "+====+===+",
//!         "| a  | b |",
//!         "+====+===+",
//!         "| cc | d |",
//!     ]
//! );
//! ```
//!
//! Parsing is best-effort by design: there is no "invalid table" error,
//! and any block of text comes out as *some* well-formed grid. Widths are
//! measured in terminal display columns, so CJK content aligns.

mod render;
mod row;
mod table;

pub use render::{cell_width, column_widths, render_table};
pub use row::{group_rows, is_separator_line, split_fields};
pub use table::{parse_table, Table};

//! # regrid: reformat the table under the cursor
//!
//! regrid takes the loosely formatted plain-text table around a cursor
//! position and rewrites it as a uniformly aligned RST-style grid table.
//! The parsing and rendering live in [`regrid_table`]; this crate owns
//! the boundary: a [`LineBuffer`] abstraction standing in for the host
//! editor's buffer, the blank-line-fenced block scan, and the single
//! command that ties them together.
//!
//! ```rust
//! use regrid::{reformat_at, MemoryBuffer};
//!
//! let mut buffer = MemoryBuffer::from_text("notes\n\na  b\ncc  d\n");
//! reformat_at(&mut buffer, 2).unwrap();
//! assert_eq!(
//!     buffer.lines(),
//!     &["notes", "", "+====+===+", "| a  | b |", "+====+===+", "| cc | d |"]
//! );
//! ```
//!
//! Editor integrations implement [`LineBuffer`] over their own buffer
//! type and call [`reformat_at`] with the cursor's line index; the
//! bundled `regrid` binary does exactly that for files and stdin.

pub mod buffer;
pub mod cli;
pub mod reformat;

pub use buffer::{LineBuffer, MemoryBuffer};
pub use reformat::{reformat_at, table_bounds, ReformatError};

// Re-export the pipeline so integrations can parse or render directly.
pub use regrid_table::{parse_table, render_table, Table};

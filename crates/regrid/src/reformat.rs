//! The reformat command: find the table block around the cursor, run it
//! through the pipeline, write the result back.

use std::ops::Range;

use regrid_table::{parse_table, render_table};

use crate::buffer::LineBuffer;

/// Errors from the cursor-driven reformat command.
///
/// Malformed table *content* is never an error; the pipeline normalizes
/// anything. Only a cursor that does not address the buffer fails.
#[derive(Debug, thiserror::Error)]
pub enum ReformatError {
    /// Cursor line index past the end of a non-empty buffer.
    #[error("cursor line {cursor} is past the end of the buffer ({len} lines)")]
    CursorOutOfBounds { cursor: usize, len: usize },
}

/// Locates the contiguous non-blank block containing the cursor line.
///
/// Scans outward from `cursor` in both directions until a blank line
/// (empty after trimming) or a buffer edge fences the block. Returns
/// `None` when the cursor line is itself blank or out of range, meaning
/// there is no table under the cursor.
pub fn table_bounds<B: LineBuffer + ?Sized>(buffer: &B, cursor: usize) -> Option<Range<usize>> {
    let is_blank = |index: usize| {
        buffer
            .line(index)
            .map(|line| line.trim().is_empty())
            .unwrap_or(true)
    };

    if is_blank(cursor) {
        return None;
    }

    let mut upper = cursor;
    while upper > 0 && !is_blank(upper - 1) {
        upper -= 1;
    }
    let mut lower = cursor;
    while !is_blank(lower + 1) {
        lower += 1;
    }
    Some(upper..lower + 1)
}

/// Reformats the table under the cursor in place.
///
/// Reads the block's lines, parses them into a normalized table, renders
/// the aligned grid, and replaces the block with it. Returns `Ok(true)`
/// when the buffer was rewritten and `Ok(false)` when there was nothing
/// to do (empty buffer, or cursor on a blank line).
pub fn reformat_at<B: LineBuffer + ?Sized>(
    buffer: &mut B,
    cursor: usize,
) -> Result<bool, ReformatError> {
    let len = buffer.line_count();
    if len == 0 {
        return Ok(false);
    }
    if cursor >= len {
        return Err(ReformatError::CursorOutOfBounds { cursor, len });
    }

    let Some(range) = table_bounds(buffer, cursor) else {
        return Ok(false);
    };

    let raw: Vec<String> = range
        .clone()
        .filter_map(|index| buffer.line(index).map(str::to_string))
        .collect();

    let rendered = render_table(&parse_table(&raw));
    buffer.replace_lines(range, rendered);
    Ok(true)
}

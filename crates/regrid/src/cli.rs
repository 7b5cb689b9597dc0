//! Command-line front end.
//!
//! The binary is a thin adapter over [`reformat_at`]: load a document
//! into a [`MemoryBuffer`], reformat the table under the given line, and
//! emit the document again. By default it behaves as a filter (stdin to
//! stdout); with a file argument it prints the rewritten document, or
//! updates the file in place under `--write`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::buffer::MemoryBuffer;
use crate::reformat::reformat_at;

/// Reformat the plain-text table under the cursor into an aligned grid
/// table.
#[derive(Debug, Parser)]
#[command(name = "regrid", version)]
pub struct Cli {
    /// File to reformat; reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// One-based line number the cursor is on.
    #[arg(short, long, default_value_t = 1)]
    pub line: usize,

    /// Rewrite FILE in place instead of printing the document.
    #[arg(short, long, requires = "file")]
    pub write: bool,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let text = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };

    let cursor = cli
        .line
        .checked_sub(1)
        .context("--line is one-based and must be at least 1")?;

    let mut buffer = MemoryBuffer::from_text(&text);
    reformat_at(&mut buffer, cursor)?;
    let output = buffer.to_text();

    match &cli.file {
        Some(path) if cli.write => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

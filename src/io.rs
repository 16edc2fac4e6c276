//! Text input and output for the command-line tool
//!
//! Input comes from a file or stdin, output goes to a file or stdout. Output
//! is written exactly as produced, without a trailing newline.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Read all of `reader`, failing if it holds more than `limit` bytes
pub fn read_bounded<R: Read>(reader: R, limit: usize) -> Result<String> {
    let mut buf = Vec::new();
    reader
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut buf)
        .context("Failed to read input")?;

    if buf.len() > limit {
        bail!("Input exceeds the {} byte limit", limit);
    }

    String::from_utf8(buf).context("Input is not valid UTF-8")
}

/// Read input text from `path`, or from stdin when no path is given
pub fn read_input(path: Option<&Path>, limit: usize) -> Result<String> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            read_bounded(file, limit)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => read_bounded(io::stdin().lock(), limit),
    }
}

/// Write output text to `path`, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}

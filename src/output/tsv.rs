//! Tab-delimited table writer
//!
//! Plain TSV with no quoting: a tab, carriage return, or newline inside a
//! field would corrupt the table shape, so those are flattened to single
//! spaces before writing. Everything else passes through untouched.

use crate::output::traits::{OutputResult, RowSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes result tables as TSV files
#[derive(Debug, Default)]
pub struct TsvSink;

impl TsvSink {
    pub fn new() -> Self {
        Self
    }
}

impl RowSink for TsvSink {
    fn write(&self, path: &Path, header: &[&str], rows: &[Vec<String>]) -> OutputResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        write_row(&mut writer, header.iter().copied())?;
        for row in rows {
            write_row(&mut writer, row.iter().map(String::as_str))?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Writes a single tab-separated line to any writer
fn write_row<'a, W, I>(writer: &mut W, cells: I) -> std::io::Result<()>
where
    W: Write,
    I: Iterator<Item = &'a str>,
{
    let mut first = true;
    for cell in cells {
        if !first {
            write!(writer, "\t")?;
        } else {
            first = false;
        }
        write!(writer, "{}", sanitize(cell))?;
    }
    writeln!(writer)
}

/// Replaces characters that would break the table shape with spaces
fn sanitize(cell: &str) -> String {
    cell.replace(['\t', '\r', '\n'], " ")
}

//! JSON output for one-shot commands
//!
//! One pretty-printed JSON document per command on stdout. Logs go to
//! stderr.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a value as pretty JSON to stdout
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    write_json_to(&mut stdout, value)
}

fn write_json_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

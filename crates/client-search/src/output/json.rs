//! JSON output: records as an array, duplicates as an object keyed by email.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;

/// Pretty-printed JSON followed by a newline.
pub(crate) fn write_pretty<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

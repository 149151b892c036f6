//! Plain-text summary of a fetch outcome

use crate::FetchOutcome;
use std::io::{self, Write};

/// Writes the human-readable summary of a fetch outcome
///
/// On success this is three lines (title, link count, status). On failure it
/// is exactly one line: the error message.
pub fn write_summary(outcome: &FetchOutcome, out: &mut impl Write) -> io::Result<()> {
    match outcome {
        Ok(page) => {
            writeln!(out, "Title: {}", page.title)?;
            writeln!(out, "Found {} links", page.links.len())?;
            writeln!(out, "Status: {}", page.status_code)?;
        }
        Err(e) => writeln!(out, "{}", e)?,
    }

    Ok(())
}

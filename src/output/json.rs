//! JSON rendering of a fetch outcome
//!
//! Success serializes the page summary as-is. Failure serializes to an object
//! holding only an `error` key.

use crate::FetchOutcome;
use serde_json::{json, Value};
use std::io::{self, Write};

/// Converts a fetch outcome to its JSON form
pub fn to_json(outcome: &FetchOutcome) -> Value {
    match outcome {
        Ok(page) => json!({
            "title": page.title,
            "links": page.links,
            "status_code": page.status_code,
        }),
        Err(e) => json!({ "error": e.to_string() }),
    }
}

/// Writes the pretty-printed JSON form of a fetch outcome, followed by a newline
pub fn write_json(outcome: &FetchOutcome, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &to_json(outcome))?;
    writeln!(out)
}

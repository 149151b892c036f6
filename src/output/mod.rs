//! Output module for reporting fetch outcomes
//!
//! This module handles:
//! - The plain three-line summary printed by the interactive CLI
//! - A JSON rendering of the same outcome

mod json;
mod summary;

pub use json::{to_json, write_json};
pub use summary::write_summary;

use crate::FetchOutcome;
use std::io::{self, Write};

/// How a fetch outcome is written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Title:`, `Found N links`, `Status:` lines, or the error message
    #[default]
    Text,

    /// A single JSON object
    Json,
}

impl OutputFormat {
    /// Writes the outcome in this format
    pub fn write(self, outcome: &FetchOutcome, out: &mut impl Write) -> io::Result<()> {
        match self {
            OutputFormat::Text => write_summary(outcome, out),
            OutputFormat::Json => write_json(outcome, out),
        }
    }
}

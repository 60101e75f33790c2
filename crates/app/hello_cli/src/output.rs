//! Rendering of command results for stdout.

use serde::Serialize;

use crate::Result;
use crate::cli::OutputFormat;

/// Serialize `value` as JSON in the requested layout.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(text)
}

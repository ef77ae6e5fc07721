//! Output formatting for the nthbuyer CLI.

use anyhow::{Context, Result};
use nthbuyer_lib::EstimationResult;
use std::io::Write;

/// Serializes a result as compact or pretty JSON.
pub(crate) fn render(result: &EstimationResult, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };
    text.context("Failed to serialize result")
}

/// Writes the rendered result to stdout followed by a newline.
pub(crate) fn print_result(result: &EstimationResult, pretty: bool) -> Result<()> {
    let text = render(result, pretty)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}").context("Failed to write result")?;
    Ok(())
}

//! Shared CLI utilities.

use anyhow::Result;

use crate::domain::ExportFormat;

/// Parse a comma-separated format list, trimming whitespace and discarding
/// empty segments. Returns `None` when `value` is `None`.
pub fn parse_formats(value: Option<&str>) -> Result<Option<Vec<ExportFormat>>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let formats = value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<ExportFormat>().map_err(anyhow::Error::msg))
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(formats))
}

/// Drop a single trailing line ending, as left by `echo` or a heredoc.
pub fn trim_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

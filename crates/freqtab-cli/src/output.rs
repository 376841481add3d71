use serde::Serialize;

use crate::error::CliResult;

/// How results are written to stdout (and errors to stderr).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable listings and charts
    #[default]
    Text,
}

/// Print `value` as JSON, or hand it to `text` for the plain rendering.
pub fn emit<T, F>(format: OutputFormat, value: &T, text: F) -> CliResult<()>
where
    T: Serialize,
    F: FnOnce(&T),
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => text(value),
    }
    Ok(())
}

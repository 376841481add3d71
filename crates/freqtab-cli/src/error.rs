use std::io;
use std::process::ExitCode;

use freqtab_core::FreqTabError;
use serde::Serialize;
use thiserror::Error;

use crate::output::OutputFormat;

pub const EXIT_INPUT_ERROR: u8 = 2;
pub const EXIT_RUNTIME_ERROR: u8 = 3;

/// Who is to blame: the text or options handed in, or the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Input,
    Runtime,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Input => EXIT_INPUT_ERROR,
            ErrorKind::Runtime => EXIT_RUNTIME_ERROR,
        }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected by the engine: missing text or a bad option value.
    #[error(transparent)]
    Core(#[from] FreqTabError),

    /// The input source produced bytes that are not text.
    #[error("Error reading '{input}': {source}")]
    Decode {
        input: String,
        source: FreqTabError,
    },

    #[error("Failed to open file '{path}': {source}")]
    OpenFile { path: String, source: io::Error },

    #[error("Failed to read stdin: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CliError::Core(_) | CliError::Decode { .. } => ErrorKind::Input,
            CliError::OpenFile { .. } | CliError::ReadStdin(_) | CliError::Json(_) => {
                ErrorKind::Runtime
            }
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }

    /// Write the error to stderr in `format` and return the exit code.
    pub fn report(&self, format: OutputFormat) -> ExitCode {
        let message = self.to_string();

        match format {
            OutputFormat::Json => {
                let envelope = ErrorOutput {
                    error: &message,
                    kind: self.kind(),
                    exit_code: self.exit_code(),
                };
                match serde_json::to_string_pretty(&envelope) {
                    Ok(json) => eprintln!("{}", json),
                    Err(_) => eprintln!("Error: {}", message),
                }
            }
            OutputFormat::Text => eprintln!("Error: {}", message),
        }

        ExitCode::from(self.exit_code())
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Serialize)]
struct ErrorOutput<'a> {
    error: &'a str,
    kind: ErrorKind,
    exit_code: u8,
}

use std::io;

use jlex::ProfileError;

/// Driver failures. Lexical errors in the input are not `CliError`s; they
/// are reported as diagnostics and reflected in the exit code.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` needs at least one file")]
    MissingFiles { command: &'static str },

    #[error("unknown option `{option}` for `{command}`")]
    UnknownOption {
        command: &'static str,
        option: String,
    },

    #[error("invalid value `{value}` for `{flag}`, expected {expected}")]
    InvalidValue {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("cannot read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    #[error("cannot encode tokens as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid language profile: {0}")]
    Profile(#[from] ProfileError),
}

impl CliError {
    /// Errors caused by the command line itself, worth a usage reminder.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::UnknownCommand(_)
                | CliError::MissingFiles { .. }
                | CliError::UnknownOption { .. }
                | CliError::InvalidValue { .. }
        )
    }
}

//! Command handlers for the `jlexc` CLI.
//!
//! Each submodule implements one command. Option parsing shared by the
//! commands and source loading live here.

use jlex::{LanguageProfile, ProfileBuilder, SourceBuffer, StringRecovery};
use rayon::prelude::*;
use tracing::debug;

use crate::error::CliError;

mod check;
mod lex;

pub use check::{check_files, CheckOptions};
pub use lex::{lex_files, LexOptions};

/// A loaded input file.
pub(crate) struct SourceFile {
    pub path: String,
    pub buffer: SourceBuffer,
}

/// Read every path in parallel. The result keeps argument order.
pub(crate) fn read_sources(paths: &[String]) -> Result<Vec<SourceFile>, CliError> {
    let files = paths
        .par_iter()
        .map(|path| {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            Ok(SourceFile {
                path: path.clone(),
                buffer: SourceBuffer::new(&text),
            })
        })
        .collect::<Result<Vec<_>, CliError>>()?;
    debug!(files = files.len(), "loaded sources");
    Ok(files)
}

/// Options every command understands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CommonOptions {
    pub files: Vec<String>,
    pub recovery: StringRecovery,
    pub annotations: bool,
}

impl CommonOptions {
    /// Consume `arg` if it is a shared option or a file path.
    ///
    /// Returns `Ok(false)` for an option this struct does not know.
    pub fn accept(&mut self, arg: &str) -> Result<bool, CliError> {
        if let Some(value) = arg.strip_prefix("--recovery=") {
            self.recovery = match value {
                "line" => StringRecovery::NextLine,
                "semicolon" => StringRecovery::NextSemicolon,
                _ => {
                    return Err(CliError::InvalidValue {
                        flag: "--recovery",
                        value: value.to_string(),
                        expected: "`line` or `semicolon`",
                    })
                }
            };
        } else if arg == "--annotations" {
            self.annotations = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Ok(false);
        } else {
            self.files.push(arg.to_string());
        }
        Ok(true)
    }

    pub fn require_files(&self, command: &'static str) -> Result<(), CliError> {
        if self.files.is_empty() {
            return Err(CliError::MissingFiles { command });
        }
        Ok(())
    }

    /// The Java profile adjusted by these options.
    pub fn builder(&self) -> ProfileBuilder {
        let base = if self.annotations {
            LanguageProfile::java_with_annotations()
        } else {
            LanguageProfile::java()
        };
        base.to_builder().string_recovery(self.recovery)
    }
}

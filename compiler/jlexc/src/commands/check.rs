//! The `check` command: report lexical errors with source snippets.

use std::io::{self, IsTerminal};

use jlex::{lex, Diagnostics};
use jlex_diagnostic::emitter::{ColorMode, TerminalEmitter};
use rayon::prelude::*;

use super::{read_sources, CommonOptions};
use crate::error::CliError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub(crate) common: CommonOptions,
    pub color: ColorMode,
}

impl CheckOptions {
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = CheckOptions::default();
        for arg in args {
            if let Some(value) = arg.strip_prefix("--color=") {
                options.color = parse_color(value)?;
            } else if !options.common.accept(arg)? {
                return Err(CliError::UnknownOption {
                    command: "check",
                    option: arg.clone(),
                });
            }
        }
        options.common.require_files("check")?;
        Ok(options)
    }
}

fn parse_color(value: &str) -> Result<ColorMode, CliError> {
    match value {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(CliError::InvalidValue {
            flag: "--color",
            value: value.to_string(),
            expected: "`auto`, `always`, or `never`",
        }),
    }
}

/// Scan every file and print its diagnostics to stderr.
///
/// Returns exit code 1 when any file produced a diagnostic.
pub fn check_files(options: &CheckOptions) -> Result<i32, CliError> {
    let profile = options.common.builder().build()?;
    let files = read_sources(&options.common.files)?;
    let results: Vec<Diagnostics> = files
        .par_iter()
        .map(|file| lex(&file.buffer, &profile).diagnostics)
        .collect();

    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(stderr.lock(), options.color, is_tty);
    let mut total = 0;
    for (file, diagnostics) in files.iter().zip(&results) {
        emitter.emit_all(&file.path, &file.buffer, diagnostics)?;
        emitter.emit_summary(&file.path, diagnostics.len())?;
        total += diagnostics.len();
    }
    emitter.flush()?;

    tracing::debug!(files = files.len(), diagnostics = total, "check finished");
    Ok(i32::from(total > 0))
}

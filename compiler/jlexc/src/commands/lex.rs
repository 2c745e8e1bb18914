//! The `lex` command: dump the token stream of each file.

use std::fmt::Write as _;
use std::io::{self, Write};

use jlex::{lex, Diagnostics, LanguageProfile, Token, TokenKind};
use rayon::prelude::*;
use serde::Serialize;

use super::{read_sources, CommonOptions, SourceFile};
use crate::error::CliError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub(crate) common: CommonOptions,
    pub json: bool,
    pub trivia: bool,
}

impl LexOptions {
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = LexOptions::default();
        for arg in args {
            if arg == "--json" {
                options.json = true;
            } else if arg == "--trivia" {
                options.trivia = true;
            } else if !options.common.accept(arg)? {
                return Err(CliError::UnknownOption {
                    command: "lex",
                    option: arg.clone(),
                });
            }
        }
        options.common.require_files("lex")?;
        Ok(options)
    }

    fn profile(&self) -> Result<LanguageProfile, CliError> {
        Ok(self
            .common
            .builder()
            .surface_whitespace(self.trivia)
            .surface_comments(self.trivia)
            .build()?)
    }
}

/// One token in the JSON dump.
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct TokenRecord<'a> {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: &'a str,
    pub line: u32,
    pub column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

impl<'a> TokenRecord<'a> {
    pub fn new(tok: &Token<'a>, diagnostics: &'a Diagnostics) -> Self {
        let error = match tok.kind {
            TokenKind::Error(category) => diagnostics
                .by_category(category)
                .find(|d| d.span.start == tok.span.start)
                .map(|d| d.message.as_str()),
            _ => None,
        };
        TokenRecord {
            kind: kind_label(tok.kind),
            value: tok.lexeme,
            line: tok.span.start.line,
            column: tok.span.start.column,
            error,
        }
    }
}

/// `Keyword(Class)` → `"Keyword:class"`, `Identifier` → `"Identifier"`.
pub(crate) fn kind_label(kind: TokenKind) -> String {
    match kind {
        TokenKind::Keyword(kw) => format!("Keyword:{kw}"),
        TokenKind::Operator(op) => format!("Operator:{op}"),
        TokenKind::Punctuation(p) => format!("Punctuation:{p}"),
        TokenKind::Error(category) => format!("Error:{}", category.name()),
        other => other.category_name().to_string(),
    }
}

/// Per-file output, rendered off the main thread.
struct Report {
    stdout: String,
    stderr: String,
    diagnostics: usize,
}

fn render(file: &SourceFile, profile: &LanguageProfile, json: bool) -> Result<Report, CliError> {
    let output = lex(&file.buffer, profile);
    let mut stdout = String::new();
    let mut stderr = String::new();

    if json {
        let records: Vec<_> = output
            .tokens
            .iter()
            .map(|tok| TokenRecord::new(tok, &output.diagnostics))
            .collect();
        stdout = serde_json::to_string_pretty(&records)?;
        stdout.push('\n');
    } else {
        for tok in &output.tokens {
            let _ = writeln!(
                stdout,
                "{} {} {:?}",
                tok.span.start,
                kind_label(tok.kind),
                tok.lexeme
            );
        }
    }
    for diag in &output.diagnostics {
        let _ = writeln!(stderr, "{}:{diag}", file.path);
    }

    Ok(Report {
        stdout,
        stderr,
        diagnostics: output.diagnostics.len(),
    })
}

/// Lex every file and print the results in argument order.
///
/// Exits with 0 even when diagnostics were produced; `check` is the
/// command for gating on lexical errors.
pub fn lex_files(options: &LexOptions) -> Result<i32, CliError> {
    let profile = options.profile()?;
    let files = read_sources(&options.common.files)?;
    let reports = files
        .par_iter()
        .map(|file| render(file, &profile, options.json))
        .collect::<Result<Vec<_>, CliError>>()?;

    let multiple = files.len() > 1;
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    for (file, report) in files.iter().zip(&reports) {
        if multiple && !options.json {
            writeln!(out, "==> {} <==", file.path)?;
        }
        out.write_all(report.stdout.as_bytes())?;
        err.write_all(report.stderr.as_bytes())?;
    }
    out.flush()?;

    let total: usize = reports.iter().map(|r| r.diagnostics).sum();
    tracing::debug!(files = files.len(), diagnostics = total, "lex finished");
    Ok(0)
}

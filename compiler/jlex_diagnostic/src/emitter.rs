//! Human-readable diagnostic output.
//!
//! [`render_snippet`] draws one diagnostic with the offending source line
//! and a caret underline. [`TerminalEmitter`] writes those snippets to a
//! stream with optional ANSI color.

use std::fmt::Write as _;
use std::io::{self, Write};

use jlex_core::SourceBuffer;

use crate::{Diagnostic, Diagnostics, Severity};

/// Tabs are expanded to this many spaces in snippets so carets line up.
const TAB_WIDTH: usize = 4;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Render a diagnostic in the familiar compiler style:
///
/// ```text
/// error[L0002]: unterminated string literal
///   --> File.java:25:14
///    |
/// 25 |         String s = " This is an invalid string literal
///    |                    ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
///    = note: unterminated string literal: missing closing `"` before end of line
/// ```
///
/// Spans running past the end of their first line are underlined to the
/// end of that line. Empty spans get a single caret.
pub fn render_snippet(source_name: &str, buffer: &SourceBuffer, diag: &Diagnostic) -> String {
    Snippet::new(source_name, buffer, diag).render(false)
}

struct Snippet<'a> {
    source_name: &'a str,
    diag: &'a Diagnostic,
    line_text: &'a str,
    /// Display columns before the span starts.
    pad: usize,
    /// Display width of the underline.
    carets: usize,
}

impl<'a> Snippet<'a> {
    fn new(source_name: &'a str, buffer: &'a SourceBuffer, diag: &'a Diagnostic) -> Self {
        let start = diag.span.start;
        let line_text = buffer.line_text(start.line).unwrap_or("");

        let before: String = line_text
            .chars()
            .take(start.column.saturating_sub(1) as usize)
            .collect();
        let span_chars = if start.line == diag.span.end.line {
            diag.span.end.column.saturating_sub(start.column) as usize
        } else {
            usize::MAX
        };
        let under: String = line_text
            .chars()
            .skip(start.column.saturating_sub(1) as usize)
            .take(span_chars)
            .collect();

        Snippet {
            source_name,
            diag,
            line_text,
            pad: display_width(&before),
            carets: display_width(&under).max(1),
        }
    }

    fn render(&self, color: bool) -> String {
        let paint = |text: &str, code: &str| {
            if color {
                format!("{code}{text}{}", colors::RESET)
            } else {
                text.to_string()
            }
        };

        let line_no = self.diag.span.start.line.to_string();
        let gutter = " ".repeat(line_no.len());
        let bar = paint("|", colors::GUTTER);
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{}{}: {}",
            paint(self.diag.severity.as_str(), colors::ERROR),
            paint(&format!("[{}]", self.diag.code()), colors::BOLD),
            self.diag.category.title(),
        );
        let _ = writeln!(
            out,
            "{gutter}{} {}:{}",
            paint("-->", colors::GUTTER),
            self.source_name,
            self.diag.span.start,
        );
        let _ = writeln!(out, "{gutter} {bar}");
        let _ = writeln!(
            out,
            "{} {bar} {}",
            paint(&line_no, colors::GUTTER),
            expand_tabs(self.line_text),
        );
        let _ = writeln!(
            out,
            "{gutter} {bar} {}{}",
            " ".repeat(self.pad),
            paint(&"^".repeat(self.carets), colors::ERROR),
        );
        let _ = writeln!(
            out,
            "{gutter} {} {}: {}",
            paint("=", colors::GUTTER),
            paint("note", colors::NOTE),
            self.diag.message,
        );
        if self.diag.severity == Severity::Fatal {
            let _ = writeln!(
                out,
                "{gutter} {} {}: scanning stopped here",
                paint("=", colors::GUTTER),
                paint("note", colors::NOTE),
            );
        }
        out
    }
}

fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}

fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto`, `is_tty` decides; the other modes ignore it.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes rendered snippets for one source to a stream.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    pub fn emit(
        &mut self,
        source_name: &str,
        buffer: &SourceBuffer,
        diag: &Diagnostic,
    ) -> io::Result<()> {
        let text = Snippet::new(source_name, buffer, diag).render(self.colors);
        writeln!(self.writer, "{text}")
    }

    pub fn emit_all(
        &mut self,
        source_name: &str,
        buffer: &SourceBuffer,
        diagnostics: &Diagnostics,
    ) -> io::Result<()> {
        for diag in diagnostics {
            self.emit(source_name, buffer, diag)?;
        }
        Ok(())
    }

    /// `error: 3 lexical errors in File.java`. Nothing is written for zero.
    pub fn emit_summary(&mut self, source_name: &str, count: usize) -> io::Result<()> {
        if count == 0 {
            return Ok(());
        }
        let label = if self.colors {
            format!("{}error{}", colors::ERROR, colors::RESET)
        } else {
            "error".to_string()
        };
        writeln!(
            self.writer,
            "{label}: {count} lexical error{} in {source_name}",
            if count == 1 { "" } else { "s" }
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

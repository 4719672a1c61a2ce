//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter for diagnostics about one source file.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    path: &'src str,
    source: &'src str,
    lines: LineOffsetTable,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create an emitter for diagnostics in `source`, reported as `path`.
    pub fn new(writer: W, mode: ColorMode, is_tty: bool, path: &'src str, source: &'src str) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            path,
            source,
            lines: LineOffsetTable::build(source),
        }
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&self, color: &'static str) -> &'static str {
        if self.colors {
            color
        } else {
            ""
        }
    }

    fn write_diagnostic(&mut self, diag: &Diagnostic) -> io::Result<()> {
        let color = match diag.severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        let (color, bold, reset) = (
            self.paint(color),
            self.paint(colors::BOLD),
            self.paint(colors::RESET),
        );
        writeln!(
            self.writer,
            "{color}{}[{}]{reset}{bold}: {}{reset}",
            diag.severity, diag.code, diag.message
        )?;

        for label in &diag.labels {
            let (line, col) = self.lines.span_start(self.source, label.span);
            let arrow = if label.is_primary { "-->" } else { ":::" };
            writeln!(self.writer, "  {arrow} {}:{line}:{col}", self.path)?;
            if let Some(text) = self.lines.line_text(self.source, line) {
                let width = label
                    .span
                    .len()
                    .max(1)
                    .min(u32::try_from(text.len()).unwrap_or(u32::MAX).max(1));
                let pad = " ".repeat(col.saturating_sub(1) as usize);
                let carets = "^".repeat(width as usize);
                writeln!(self.writer, "   |")?;
                writeln!(self.writer, "   | {text}")?;
                writeln!(
                    self.writer,
                    "   | {pad}{color}{carets} {}{reset}",
                    label.message
                )?;
            }
        }

        let note = self.paint(colors::NOTE);
        for n in &diag.notes {
            writeln!(self.writer, "   = {note}note{reset}: {n}")?;
        }
        writeln!(self.writer)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Write errors on the report stream are not recoverable here
        let _ = self.write_diagnostic(diagnostic);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let (bold, reset) = (self.paint(colors::BOLD), self.paint(colors::RESET));
        let _ = match (error_count, warning_count) {
            (0, 0) => writeln!(self.writer, "{bold}{}: no problems found{reset}", self.path),
            (e, 0) => writeln!(self.writer, "{bold}{}: {e} error{}{reset}", self.path, plural_s(e)),
            (0, w) => writeln!(
                self.writer,
                "{bold}{}: {w} warning{}{reset}",
                self.path,
                plural_s(w)
            ),
            (e, w) => writeln!(
                self.writer,
                "{bold}{}: {e} error{}, {w} warning{}{reset}",
                self.path,
                plural_s(e),
                plural_s(w)
            ),
        };
    }
}

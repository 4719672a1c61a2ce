//! The `check` command: report dialect conformance problems in a file.

use std::io::Write;
use std::path::PathBuf;

use xq_conformance::check_module;
use xq_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use xq_dialect::{Implementation, ImplementationItem, Settings, VersionLabel};
use xq_lexer_core::tokenize;

use super::read_file;
use crate::CliError;

#[derive(Clone, Debug, Default)]
pub struct CheckOptions {
    /// Implementation item id such as `marklogic/v8/1.0-ml`. Takes
    /// precedence over `settings`.
    pub target: Option<String>,
    /// JSON settings file.
    pub settings: Option<PathBuf>,
    pub color: ColorMode,
}

/// The implementation and configured version to check against.
pub fn resolve_selection(
    options: &CheckOptions,
) -> Result<(&'static Implementation, VersionLabel), CliError> {
    if let Some(id) = &options.target {
        let item =
            ImplementationItem::parse(id).ok_or_else(|| CliError::UnknownTarget(id.clone()))?;
        return Ok((item.implementation, item.version));
    }
    let settings = match &options.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    Ok((settings.implementation()?, settings.version()?))
}

/// Check a file, returning the number of errors reported.
pub fn check_file(
    path: &str,
    options: &CheckOptions,
    out: &mut impl Write,
    is_tty: bool,
) -> Result<usize, CliError> {
    let source = read_file(path)?;
    check_source(path, &source, options, out, is_tty)
}

/// Check `source`, rendering diagnostics and a summary to `out`.
pub fn check_source(
    path: &str,
    source: &str,
    options: &CheckOptions,
    out: &mut impl Write,
    is_tty: bool,
) -> Result<usize, CliError> {
    let (implementation, version) = resolve_selection(options)?;
    tracing::debug!(path, implementation = implementation.id, %version, "checking");

    let tokens = tokenize(source);
    let diagnostics = check_module(source, &tokens, implementation, version);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();

    let mut emitter = TerminalEmitter::new(out, options.color, is_tty, path, source);
    emitter.emit_all(&diagnostics);
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
    Ok(errors)
}

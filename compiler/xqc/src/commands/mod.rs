//! Command handlers for the `xqc` CLI.
//!
//! Handlers write to a caller-supplied writer and return a [`CliError`]
//! for anything that prevents them from running. Shared helpers live here.

use std::path::Path;

use crate::CliError;

mod catalog;
mod check;
mod explain;
mod lex;

pub use catalog::{list_dialects, list_implementations};
pub use check::{check_file, check_source, resolve_selection, CheckOptions};
pub use explain::explain_error;
pub use lex::{lex_file, lex_source};

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: Path::new(path).to_path_buf(),
        source,
    })
}

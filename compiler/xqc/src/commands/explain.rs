//! The `explain` command: display documentation for error codes.

use std::io::Write;

use xq_diagnostic::{ErrorCode, ErrorDocs};

use crate::CliError;

/// Display the documentation for `code_str` (`XPST0003`, `err:XQST0031`).
pub fn explain_error(code_str: &str, out: &mut impl Write) -> Result<(), CliError> {
    let code: ErrorCode = code_str
        .parse()
        .map_err(|()| CliError::UnknownErrorCode(code_str.to_owned()))?;
    let doc = ErrorDocs::get(code).ok_or_else(|| CliError::NoDocs(code.to_string()))?;
    writeln!(out, "{doc}")?;
    Ok(())
}

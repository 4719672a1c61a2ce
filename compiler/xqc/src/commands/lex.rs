//! The `lex` command: print the token stream of a file.

use std::io::Write;

use xq_lexer_core::tokenize;

use super::read_file;
use crate::CliError;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, out: &mut impl Write) -> Result<(), CliError> {
    let source = read_file(path)?;
    lex_source(path, &source, out)
}

/// One line per token: kind, byte range, entry state and text.
pub fn lex_source(path: &str, source: &str, out: &mut impl Write) -> Result<(), CliError> {
    let tokens = tokenize(source);
    writeln!(out, "Tokens for '{path}' ({} tokens):", tokens.len())?;
    for token in &tokens {
        writeln!(
            out,
            "  {:<34} {}..{} [{}] {:?}",
            token.tag.name(),
            token.start,
            token.end,
            token.state.as_u8(),
            token.text(source)
        )?;
    }
    Ok(())
}

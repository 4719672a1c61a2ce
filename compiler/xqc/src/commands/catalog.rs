//! The `dialects` and `implementations` commands.

use std::io::Write;

use xq_dialect::{Dialect, Implementation};

use crate::CliError;

pub fn list_dialects(out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "Dialects:")?;
    for dialect in Dialect::all() {
        writeln!(out, "  {:<12} {:<24} {}", dialect.id, dialect.name, dialect.reference)?;
    }
    Ok(())
}

/// List implementations with the target id of each supported version.
pub fn list_implementations(out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "Implementations:")?;
    for implementation in Implementation::all() {
        writeln!(out, "  {:<16} {}", implementation.id, implementation.name)?;
        for item in implementation.items() {
            let default = if item.version == implementation.default_version() {
                " (default)"
            } else {
                ""
            };
            writeln!(out, "    {}{default}", item.id())?;
        }
    }
    Ok(())
}

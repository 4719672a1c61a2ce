use std::io;
use std::path::PathBuf;

use xq_dialect::SettingsError;

/// Errors that stop a command before it can report diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("unknown target '{0}' (run `xqc implementations` for the list)")]
    UnknownTarget(String),
    #[error("unknown error code '{0}' (codes look like XPST0003)")]
    UnknownErrorCode(String),
    #[error("no documentation available for {0}")]
    NoDocs(String),
}

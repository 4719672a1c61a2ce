//! The user's selected implementation and version.
//!
//! Settings are stored as plain ids so that a settings file naming an
//! implementation this build does not know still loads; resolution to
//! catalog entries happens in [`Settings::target`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Implementation, Target, VersionLabel};

/// Errors loading or resolving [`Settings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown implementation `{0}`")]
    UnknownImplementation(String),
    #[error("unknown XQuery version `{0}`")]
    UnknownVersion(String),
}

/// Selected implementation id and version label.
///
/// Missing fields default to the W3C reference at its default version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub implementation: String,
    pub version: String,
}

impl Default for Settings {
    fn default() -> Self {
        let w3c = default_implementation();
        Settings {
            implementation: w3c.id.to_owned(),
            version: w3c.default_version().as_str().to_owned(),
        }
    }
}

fn default_implementation() -> &'static Implementation {
    &Implementation::all()[0]
}

impl Settings {
    /// Read settings from a JSON file.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(text)?;
        tracing::debug!(
            implementation = %settings.implementation,
            version = %settings.version,
            "loaded settings"
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Select an implementation, keeping the current version if the
    /// implementation supports it and otherwise resetting to its default.
    pub fn select_implementation(&mut self, implementation: &Implementation) {
        self.implementation = implementation.id.to_owned();
        let supported = VersionLabel::parse(&self.version)
            .is_some_and(|version| implementation.supports(version));
        if !supported {
            let default = implementation.default_version();
            tracing::debug!(
                implementation = implementation.id,
                from = %self.version,
                to = %default,
                "version not supported, resetting to default"
            );
            self.version = default.as_str().to_owned();
        }
    }

    /// Select a version. Membership in the implementation's supported set
    /// is the caller's concern.
    pub fn select_version(&mut self, version: VersionLabel) {
        self.version = version.as_str().to_owned();
    }

    pub fn implementation(&self) -> Result<&'static Implementation, SettingsError> {
        Implementation::parse(&self.implementation)
            .ok_or_else(|| SettingsError::UnknownImplementation(self.implementation.clone()))
    }

    pub fn version(&self) -> Result<VersionLabel, SettingsError> {
        VersionLabel::parse(&self.version)
            .ok_or_else(|| SettingsError::UnknownVersion(self.version.clone()))
    }

    /// Resolve the selection to a conformance target.
    pub fn target(&self) -> Result<Target, SettingsError> {
        Ok(self.implementation()?.target(self.version()?))
    }
}

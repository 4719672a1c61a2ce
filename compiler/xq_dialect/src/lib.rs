//! XQuery dialects, vendor implementations and their supported versions.
//!
//! Everything here is a closed, immutable catalog held in `static`s:
//!
//! - [`Dialect`]: a concrete language dialect (`1.0-ml/8`, `3.1/W3C`, ...).
//! - [`Implementation`]: a vendor product release with an ordered set of
//!   supported [`VersionLabel`]s and a default.
//! - [`ImplementationItem`]: one implementation paired with one version,
//!   addressed by ids like `marklogic/v8/1.0-ml`.
//!
//! Each of these resolves to a [`Target`], the value conformance queries
//! are evaluated against. [`Settings`] is the user-selected
//! implementation and version, loaded from JSON.
//!
//! Lookups are exact-string matches and return `None` on a miss.

mod dialect;
mod implementation;
mod settings;
mod target;
mod version;

pub use dialect::Dialect;
pub use implementation::{Implementation, ImplementationItem};
pub use settings::{Settings, SettingsError};
pub use target::Target;
pub use version::{Vendor, Version, VersionLabel, XQueryVersion};

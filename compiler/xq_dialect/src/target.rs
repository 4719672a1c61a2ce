//! The dialect a query is checked against.

use std::fmt;

use crate::{Vendor, Version, XQueryVersion};

/// The value every conformance query is evaluated against.
///
/// `version` is the vendor's product version for vendor dialects
/// (`MarkLogic 8.0`) and the language version for W3C (`XQuery 3.0`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Target {
    pub vendor: Vendor,
    pub version: Version,
    pub xquery: XQueryVersion,
    /// Whether the XQuery Update Facility is enabled.
    ///
    /// Shown in messages only. No conformance rule gates on it yet.
    pub update: bool,
}

impl Target {
    pub const fn new(vendor: Vendor, version: Version, xquery: XQueryVersion) -> Self {
        Target {
            vendor,
            version,
            xquery,
            update: false,
        }
    }

    /// A W3C target for a plain language version.
    pub fn w3c(xquery: XQueryVersion) -> Self {
        Target::new(Vendor::W3C, xquery.number(), xquery)
    }

    #[must_use]
    pub const fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vendor.product_name(), self.version)?;
        if self.vendor != Vendor::W3C {
            write!(f, " (XQuery {})", self.xquery)?;
        }
        if self.update {
            f.write_str(" with Update Facility")?;
        }
        Ok(())
    }
}

//! Conformance rules and their requirements.

use std::fmt;

use xq_diagnostic::ErrorCode;
use xq_dialect::{Target, Vendor, Version, XQueryVersion};

/// One way a construct can be legal: a vendor at or above a minimum
/// version, optionally only in one XQuery version of that vendor.
///
/// A W3C requirement names a language level and is met by any target
/// whose XQuery version provides it, whatever the vendor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Requirement {
    pub vendor: Vendor,
    pub minimum: Version,
    pub xquery: Option<XQueryVersion>,
}

impl Requirement {
    pub const fn new(vendor: Vendor, minimum: Version) -> Self {
        Requirement {
            vendor,
            minimum,
            xquery: None,
        }
    }

    /// Restrict the requirement to targets using `xquery`.
    #[must_use]
    pub const fn with_xquery(mut self, xquery: XQueryVersion) -> Self {
        self.xquery = Some(xquery);
        self
    }

    pub fn is_satisfied_by(&self, target: &Target) -> bool {
        let version = if self.vendor == Vendor::W3C {
            target.xquery.language_level()
        } else if target.vendor == self.vendor {
            target.version
        } else {
            return false;
        };
        version >= self.minimum && self.xquery.is_none_or(|xquery| target.xquery == xquery)
    }
}

/// `XQuery 3.0 or later`, `MarkLogic 6.0 or later with XQuery version '1.0-ml'`.
impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} or later", self.vendor.product_name(), self.minimum)?;
        if let Some(xquery) = self.xquery {
            write!(f, " with XQuery version '{xquery}'")?;
        }
        Ok(())
    }
}

/// The requirements gating a construct, and the code reported when none
/// is met.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConformanceRule {
    pub code: ErrorCode,
    pub alternatives: &'static [Requirement],
}

impl ConformanceRule {
    pub const fn new(code: ErrorCode, alternatives: &'static [Requirement]) -> Self {
        ConformanceRule { code, alternatives }
    }

    /// Whether any alternative is satisfied. A rule without alternatives
    /// never conforms.
    pub fn conforms_to(&self, target: &Target) -> bool {
        self.alternatives
            .iter()
            .any(|requirement| requirement.is_satisfied_by(target))
    }

    /// The message reported when the rule is not met.
    ///
    /// Depends only on the rule, never on the target.
    pub fn error_message(&self) -> String {
        let mut message = format!("{}: This expression requires ", self.code);
        for (i, requirement) in self.alternatives.iter().enumerate() {
            if i > 0 {
                message.push_str(", or ");
            }
            message.push_str(&requirement.to_string());
        }
        message.push('.');
        message
    }
}

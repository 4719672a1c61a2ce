//! Vendors and the version values that identify a dialect.

use std::fmt;

/// The organisation behind an XQuery language definition or product.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Vendor {
    W3C,
    MarkLogic,
    Saxon,
}

impl Vendor {
    pub const ALL: [Vendor; 3] = [Vendor::W3C, Vendor::MarkLogic, Vendor::Saxon];

    /// Identifier used as the first segment of implementation ids.
    pub fn id(self) -> &'static str {
        match self {
            Vendor::W3C => "w3c",
            Vendor::MarkLogic => "marklogic",
            Vendor::Saxon => "saxon",
        }
    }

    /// Human-readable vendor name.
    pub fn name(self) -> &'static str {
        match self {
            Vendor::W3C => "W3C",
            Vendor::MarkLogic => "MarkLogic",
            Vendor::Saxon => "Saxon",
        }
    }

    /// Name of the versioned thing in conformance messages.
    ///
    /// W3C versions are language versions, so they read as `XQuery 3.0`;
    /// vendor versions are product releases (`MarkLogic 8.0`).
    pub fn product_name(self) -> &'static str {
        match self {
            Vendor::W3C => "XQuery",
            Vendor::MarkLogic | Vendor::Saxon => self.name(),
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `major.minor` version number, ordered numerically.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16) -> Self {
        Version { major, minor }
    }

    /// Parse `"8"` or `"8.0"`. Anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let (major, minor) = match s.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (s, "0"),
        };
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(major) || !digits(minor) {
            return None;
        }
        Some(Version::new(major.parse().ok()?, minor.parse().ok()?))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The language version tag written in an XQuery version declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum XQueryVersion {
    /// MarkLogic's pre-1.0 dialect.
    V0_9Ml,
    V1_0,
    /// MarkLogic's 1.0 dialect with vendor extensions.
    V1_0Ml,
    V3_0,
    V3_1,
}

impl XQueryVersion {
    pub const ALL: [XQueryVersion; 5] = [
        XQueryVersion::V0_9Ml,
        XQueryVersion::V1_0,
        XQueryVersion::V1_0Ml,
        XQueryVersion::V3_0,
        XQueryVersion::V3_1,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            XQueryVersion::V0_9Ml => "0.9-ml",
            XQueryVersion::V1_0 => "1.0",
            XQueryVersion::V1_0Ml => "1.0-ml",
            XQueryVersion::V3_0 => "3.0",
            XQueryVersion::V3_1 => "3.1",
        }
    }

    /// Exact-match lookup of a version tag.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    /// The numeric part of the tag, without any vendor suffix.
    pub fn number(self) -> Version {
        match self {
            XQueryVersion::V0_9Ml => Version::new(0, 9),
            XQueryVersion::V1_0 | XQueryVersion::V1_0Ml => Version::new(1, 0),
            XQueryVersion::V3_0 => Version::new(3, 0),
            XQueryVersion::V3_1 => Version::new(3, 1),
        }
    }

    /// The W3C language level this dialect provides. The MarkLogic
    /// dialects build on the XQuery 1.0 core.
    pub fn language_level(self) -> Version {
        match self {
            XQueryVersion::V0_9Ml | XQueryVersion::V1_0Ml => Version::new(1, 0),
            _ => self.number(),
        }
    }

    /// Whether this is a vendor (`-ml`) dialect tag.
    pub fn is_vendor_extension(self) -> bool {
        matches!(self, XQueryVersion::V0_9Ml | XQueryVersion::V1_0Ml)
    }
}

impl fmt::Display for XQueryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A version an implementation can be configured with: an XQuery version,
/// optionally with the Update Facility enabled (`3.0-update`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct VersionLabel {
    xquery: XQueryVersion,
    update: bool,
}

impl VersionLabel {
    pub const V0_9_ML: Self = Self::new(XQueryVersion::V0_9Ml);
    pub const V1_0: Self = Self::new(XQueryVersion::V1_0);
    pub const V1_0_ML: Self = Self::new(XQueryVersion::V1_0Ml);
    pub const V1_0_UPDATE: Self = VersionLabel {
        xquery: XQueryVersion::V1_0,
        update: true,
    };
    pub const V3_0: Self = Self::new(XQueryVersion::V3_0);
    pub const V3_0_UPDATE: Self = VersionLabel {
        xquery: XQueryVersion::V3_0,
        update: true,
    };
    pub const V3_1: Self = Self::new(XQueryVersion::V3_1);

    /// Every valid label.
    pub const ALL: [VersionLabel; 7] = [
        Self::V0_9_ML,
        Self::V1_0,
        Self::V1_0_ML,
        Self::V1_0_UPDATE,
        Self::V3_0,
        Self::V3_0_UPDATE,
        Self::V3_1,
    ];

    pub const fn new(xquery: XQueryVersion) -> Self {
        VersionLabel {
            xquery,
            update: false,
        }
    }

    /// The label with the Update Facility enabled.
    ///
    /// Only W3C `1.0` and `3.0` have an Update Facility.
    pub fn with_update(xquery: XQueryVersion) -> Option<Self> {
        match xquery {
            XQueryVersion::V1_0 | XQueryVersion::V3_0 => Some(VersionLabel {
                xquery,
                update: true,
            }),
            _ => None,
        }
    }

    #[inline]
    pub fn xquery(self) -> XQueryVersion {
        self.xquery
    }

    #[inline]
    pub fn update(self) -> bool {
        self.update
    }

    pub fn as_str(self) -> &'static str {
        match (self.xquery, self.update) {
            (XQueryVersion::V1_0, true) => "1.0-update",
            (XQueryVersion::V3_0, true) => "3.0-update",
            (xquery, _) => xquery.as_str(),
        }
    }

    /// Exact-match lookup of a label such as `1.0-ml` or `3.0-update`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.strip_suffix("-update") {
            Some(base) => Self::with_update(XQueryVersion::parse(base)?),
            None => XQueryVersion::parse(s).map(Self::new),
        }
    }
}

impl From<XQueryVersion> for VersionLabel {
    fn from(xquery: XQueryVersion) -> Self {
        VersionLabel::new(xquery)
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

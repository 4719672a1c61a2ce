//! Vendor implementations and the versions they support.

use std::fmt;

use crate::{Target, Vendor, Version, VersionLabel, XQueryVersion};

/// A vendor product release that runs XQuery.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Implementation {
    /// Identifier of the form `<vendor>[/<edition>]/v<release>`, or just
    /// the vendor id for the W3C reference.
    pub id: &'static str,
    pub name: &'static str,
    pub vendor: Vendor,
    /// Product release; `None` for the W3C reference.
    pub product_version: Option<Version>,
    versions: &'static [VersionLabel],
    default_version: VersionLabel,
}

const W3C_VERSIONS: &[VersionLabel] = &[
    VersionLabel::V1_0,
    VersionLabel::V1_0_UPDATE,
    VersionLabel::V3_0,
    VersionLabel::V3_0_UPDATE,
    VersionLabel::V3_1,
];

const MARKLOGIC_VERSIONS: &[VersionLabel] = &[
    VersionLabel::V0_9_ML,
    VersionLabel::V1_0,
    VersionLabel::V1_0_ML,
];

const SAXON_9_4_VERSIONS: &[VersionLabel] = &[VersionLabel::V1_0, VersionLabel::V3_0];

const SAXON_9_7_VERSIONS: &[VersionLabel] =
    &[VersionLabel::V1_0, VersionLabel::V3_0, VersionLabel::V3_1];

static IMPLEMENTATIONS: [Implementation; 8] = [
    Implementation {
        id: "w3c",
        name: "W3C",
        vendor: Vendor::W3C,
        product_version: None,
        versions: W3C_VERSIONS,
        default_version: VersionLabel::V1_0,
    },
    marklogic("marklogic/v6", "MarkLogic 6", 6),
    marklogic("marklogic/v7", "MarkLogic 7", 7),
    marklogic("marklogic/v8", "MarkLogic 8", 8),
    saxon("saxon/EE/v9.4", "Saxon EE 9.4", 4, SAXON_9_4_VERSIONS),
    saxon("saxon/EE/v9.5", "Saxon EE 9.5", 5, SAXON_9_4_VERSIONS),
    saxon("saxon/EE/v9.6", "Saxon EE 9.6", 6, SAXON_9_4_VERSIONS),
    saxon("saxon/EE/v9.7", "Saxon EE 9.7", 7, SAXON_9_7_VERSIONS),
];

const fn marklogic(id: &'static str, name: &'static str, major: u16) -> Implementation {
    Implementation {
        id,
        name,
        vendor: Vendor::MarkLogic,
        product_version: Some(Version::new(major, 0)),
        versions: MARKLOGIC_VERSIONS,
        default_version: VersionLabel::V1_0_ML,
    }
}

const fn saxon(
    id: &'static str,
    name: &'static str,
    minor: u16,
    versions: &'static [VersionLabel],
) -> Implementation {
    Implementation {
        id,
        name,
        vendor: Vendor::Saxon,
        product_version: Some(Version::new(9, minor)),
        versions,
        default_version: VersionLabel::V3_0,
    }
}

impl Implementation {
    /// Every implementation, in catalog order.
    pub fn all() -> &'static [Implementation] {
        &IMPLEMENTATIONS
    }

    /// Exact-match lookup by id (`"marklogic/v8"`, `"saxon/EE/v9.7"`).
    pub fn parse(id: &str) -> Option<&'static Implementation> {
        IMPLEMENTATIONS.iter().find(|imp| imp.id == id)
    }

    /// Supported versions, in display order.
    pub fn versions(&self) -> &'static [VersionLabel] {
        self.versions
    }

    /// The version used when none is configured.
    pub fn default_version(&self) -> VersionLabel {
        self.default_version
    }

    pub fn supports(&self, version: VersionLabel) -> bool {
        self.versions.contains(&version)
    }

    /// The conformance target for running `version` on this implementation.
    ///
    /// Membership of `version` in [`versions`](Self::versions) is not
    /// checked. Saxon implements the W3C language without extensions, so
    /// its targets are W3C targets.
    pub fn target(&self, version: VersionLabel) -> Target {
        let xquery = version.xquery();
        let target = match (self.vendor, self.product_version) {
            (Vendor::MarkLogic, Some(product)) => Target::new(Vendor::MarkLogic, product, xquery),
            _ => Target::w3c(xquery),
        };
        target.with_update(version.update())
    }

    /// Every `(implementation, version)` pair this implementation offers.
    pub fn items(&'static self) -> impl Iterator<Item = ImplementationItem> {
        self.versions
            .iter()
            .map(move |&version| ImplementationItem {
                implementation: self,
                version,
            })
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// One supported version of one implementation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImplementationItem {
    pub implementation: &'static Implementation,
    pub version: VersionLabel,
}

impl ImplementationItem {
    /// Look up an item id such as `"marklogic/v8/1.0-ml"` or `"w3c/3.0"`.
    ///
    /// `None` if either part is unknown or the implementation does not
    /// support the version.
    pub fn parse(id: &str) -> Option<Self> {
        let (implementation, version) = id.rsplit_once('/')?;
        let implementation = Implementation::parse(implementation)?;
        let version = VersionLabel::parse(version)?;
        implementation.supports(version).then_some(ImplementationItem {
            implementation,
            version,
        })
    }

    /// Every item across the catalog.
    pub fn all() -> impl Iterator<Item = ImplementationItem> {
        Implementation::all().iter().flat_map(Implementation::items)
    }

    pub fn id(&self) -> String {
        format!("{}/{}", self.implementation.id, self.version)
    }

    pub fn xquery(&self) -> XQueryVersion {
        self.version.xquery()
    }

    pub fn target(&self) -> Target {
        self.implementation.target(self.version)
    }
}

impl fmt::Display for ImplementationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.implementation.name, self.version)
    }
}

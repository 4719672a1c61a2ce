//! Catalog of XQuery language dialects.

use std::fmt;

use crate::{Target, Vendor, Version, XQueryVersion};

/// A concrete vendor/version combination of the XQuery language.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Dialect {
    /// Identifier of the form `<xquery-version>/<vendor-tag>`.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Where the dialect is defined.
    pub reference: &'static str,
    pub vendor: Vendor,
    /// Product release for vendor dialects; `None` for W3C recommendations.
    pub product_version: Option<Version>,
    pub xquery: XQueryVersion,
}

static DIALECTS: [Dialect; 8] = [
    Dialect {
        id: "0.9-ml/3.2",
        name: "MarkLogic 3.2 (0.9-ml)",
        description: "The pre-1.0 XQuery working draft dialect of MarkLogic 3.2.",
        reference: "https://docs.marklogic.com/guide/xquery/dialects#id_65735",
        vendor: Vendor::MarkLogic,
        product_version: Some(Version::new(3, 2)),
        xquery: XQueryVersion::V0_9Ml,
    },
    Dialect {
        id: "1.0/W3C",
        name: "XQuery 1.0",
        description: "XQuery 1.0: An XML Query Language, W3C Recommendation.",
        reference: "https://www.w3.org/TR/2007/REC-xquery-20070123/",
        vendor: Vendor::W3C,
        product_version: None,
        xquery: XQueryVersion::V1_0,
    },
    Dialect {
        id: "1.0-ml/5",
        name: "MarkLogic 5 (1.0-ml)",
        description: "XQuery 1.0 with MarkLogic 5 extensions.",
        reference: "https://docs.marklogic.com/5.0/guide/xquery/dialects",
        vendor: Vendor::MarkLogic,
        product_version: Some(Version::new(5, 0)),
        xquery: XQueryVersion::V1_0Ml,
    },
    Dialect {
        id: "1.0-ml/6",
        name: "MarkLogic 6 (1.0-ml)",
        description: "XQuery 1.0 with MarkLogic 6 extensions.",
        reference: "https://docs.marklogic.com/6.0/guide/xquery/dialects",
        vendor: Vendor::MarkLogic,
        product_version: Some(Version::new(6, 0)),
        xquery: XQueryVersion::V1_0Ml,
    },
    Dialect {
        id: "1.0-ml/7",
        name: "MarkLogic 7 (1.0-ml)",
        description: "XQuery 1.0 with MarkLogic 7 extensions.",
        reference: "https://docs.marklogic.com/7.0/guide/xquery/dialects",
        vendor: Vendor::MarkLogic,
        product_version: Some(Version::new(7, 0)),
        xquery: XQueryVersion::V1_0Ml,
    },
    Dialect {
        id: "1.0-ml/8",
        name: "MarkLogic 8 (1.0-ml)",
        description: "XQuery 1.0 with MarkLogic 8 extensions, including JSON node constructors.",
        reference: "https://docs.marklogic.com/8.0/guide/xquery/dialects",
        vendor: Vendor::MarkLogic,
        product_version: Some(Version::new(8, 0)),
        xquery: XQueryVersion::V1_0Ml,
    },
    Dialect {
        id: "3.0/W3C",
        name: "XQuery 3.0",
        description: "XQuery 3.0: An XML Query Language, W3C Recommendation.",
        reference: "https://www.w3.org/TR/2014/REC-xquery-30-20140408/",
        vendor: Vendor::W3C,
        product_version: None,
        xquery: XQueryVersion::V3_0,
    },
    Dialect {
        id: "3.1/W3C",
        name: "XQuery 3.1",
        description: "XQuery 3.1: An XML Query Language, W3C Candidate Recommendation.",
        reference: "https://www.w3.org/TR/2015/CR-xquery-31-20151217/",
        vendor: Vendor::W3C,
        product_version: None,
        xquery: XQueryVersion::V3_1,
    },
];

impl Dialect {
    /// Every dialect, in catalog order.
    pub fn all() -> &'static [Dialect] {
        &DIALECTS
    }

    /// Exact-match lookup by id (`"1.0-ml/8"`, `"3.1/W3C"`).
    pub fn parse(id: &str) -> Option<&'static Dialect> {
        DIALECTS.iter().find(|dialect| dialect.id == id)
    }

    /// The conformance target this dialect denotes.
    pub fn target(&self) -> Target {
        let version = self.product_version.unwrap_or_else(|| self.xquery.number());
        Target::new(self.vendor, version, self.xquery)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

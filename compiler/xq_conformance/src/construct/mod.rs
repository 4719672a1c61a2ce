//! Version-sensitive constructs and the shared conformance check.

use std::fmt;

use xq_diagnostic::{Diagnostic, ErrorCode};
use xq_dialect::{Target, Vendor, Version, XQueryVersion};
use xq_ir::Span;
use xq_lexer_core::Tag;

use crate::{ConformanceRule, Requirement};

const W3C_1_0: Requirement = Requirement::new(Vendor::W3C, Version::new(1, 0));
const W3C_3_0: Requirement = Requirement::new(Vendor::W3C, Version::new(3, 0));
const W3C_3_1: Requirement = Requirement::new(Vendor::W3C, Version::new(3, 1));
const MARKLOGIC_6_0: Requirement =
    Requirement::new(Vendor::MarkLogic, Version::new(6, 0)).with_xquery(XQueryVersion::V1_0Ml);
const MARKLOGIC_7_0: Requirement =
    Requirement::new(Vendor::MarkLogic, Version::new(7, 0)).with_xquery(XQueryVersion::V1_0Ml);
const MARKLOGIC_8_0: Requirement =
    Requirement::new(Vendor::MarkLogic, Version::new(8, 0)).with_xquery(XQueryVersion::V1_0Ml);

const XQUERY_1_0: ConformanceRule = ConformanceRule::new(ErrorCode::XPST0003, &[W3C_1_0]);
const XQUERY_3_0: ConformanceRule = ConformanceRule::new(ErrorCode::XPST0003, &[W3C_3_0]);
const XQUERY_3_0_OR_MARKLOGIC_6_0: ConformanceRule =
    ConformanceRule::new(ErrorCode::XPST0003, &[W3C_3_0, MARKLOGIC_6_0]);
const XQUERY_3_1: ConformanceRule = ConformanceRule::new(ErrorCode::XPST0003, &[W3C_3_1]);
const MARKLOGIC_6_0_ONLY: ConformanceRule =
    ConformanceRule::new(ErrorCode::XPST0003, &[MARKLOGIC_6_0]);
const MARKLOGIC_7_0_ONLY: ConformanceRule =
    ConformanceRule::new(ErrorCode::XPST0003, &[MARKLOGIC_7_0]);
const MARKLOGIC_8_0_ONLY: ConformanceRule =
    ConformanceRule::new(ErrorCode::XPST0003, &[MARKLOGIC_8_0]);

/// The closed set of constructs whose legality depends on the dialect.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConstructKind {
    // === XQuery 1.0 ===
    /// `xquery version "..."`
    VersionDecl,
    /// `validate { ... }`, `validate lax { ... }`, `validate strict { ... }`
    ValidateExpr,
    /// `child::`, `descendant::`, `attribute::`, `self::`,
    /// `descendant-or-self::`, `following-sibling::`, `following::`
    ForwardAxis,

    // === XQuery 3.0 ===
    /// `xquery encoding "..."` without a version.
    VersionDeclEncoding,
    /// `validate type T { ... }`
    ValidateExprType,
    /// `%name` on a declaration or function test.
    Annotation,
    TryCatchExpr,
    SwitchExpr,

    // === XQuery 3.1 ===
    /// `map { ... }`
    MapConstructor,

    // === MarkLogic 6.0 ===
    /// `catch ($e) { ... }`
    CatchClause,
    /// `declare private function` and `declare private variable`.
    CompatibilityAnnotation,
    /// `namespace::`
    NamespaceAxis,
    /// `property::`
    PropertyAxis,
    /// `import stylesheet at "..."`
    StylesheetImport,
    /// `;` between transactions, each with its own version declaration.
    TransactionSeparator,
    /// `validate as T { ... }`
    ValidateAs,
    /// `binary { ... }`
    BinaryConstructor,
    /// `binary()`
    BinaryTest,

    // === MarkLogic 7.0 ===
    /// `attribute-decl()`
    AttributeDeclTest,
    ComplexTypeTest,
    ElementDeclTest,
    SchemaComponentTest,
    SchemaParticleTest,
    SchemaRootTest,
    SchemaTypeTest,
    SimpleTypeTest,

    // === MarkLogic 8.0 ===
    /// `array-node { ... }`
    ArrayConstructor,
    /// `array-node()`
    ArrayTest,
    /// `boolean-node { ... }`
    BooleanConstructor,
    /// `boolean-node()`
    BooleanTest,
    /// `number-node { ... }`
    NumberConstructor,
    /// `number-node()`
    NumberTest,
    /// `null-node { }`
    NullConstructor,
    /// `null-node()`
    NullTest,
    /// `object-node { ... }`
    ObjectNodeConstructor,
    /// `object-node()`
    ObjectNodeTest,
    SchemaFacetTest,
    /// `node(*)`
    AnyKindTestWildcard,
    /// `node("key")`
    AnyKindTestKeyName,
    /// `text("key")`
    TextTestKeyName,
}

impl ConstructKind {
    pub const ALL: [ConstructKind; 40] = [
        ConstructKind::VersionDecl,
        ConstructKind::ValidateExpr,
        ConstructKind::ForwardAxis,
        ConstructKind::VersionDeclEncoding,
        ConstructKind::ValidateExprType,
        ConstructKind::Annotation,
        ConstructKind::TryCatchExpr,
        ConstructKind::SwitchExpr,
        ConstructKind::MapConstructor,
        ConstructKind::CatchClause,
        ConstructKind::CompatibilityAnnotation,
        ConstructKind::NamespaceAxis,
        ConstructKind::PropertyAxis,
        ConstructKind::StylesheetImport,
        ConstructKind::TransactionSeparator,
        ConstructKind::ValidateAs,
        ConstructKind::BinaryConstructor,
        ConstructKind::BinaryTest,
        ConstructKind::AttributeDeclTest,
        ConstructKind::ComplexTypeTest,
        ConstructKind::ElementDeclTest,
        ConstructKind::SchemaComponentTest,
        ConstructKind::SchemaParticleTest,
        ConstructKind::SchemaRootTest,
        ConstructKind::SchemaTypeTest,
        ConstructKind::SimpleTypeTest,
        ConstructKind::ArrayConstructor,
        ConstructKind::ArrayTest,
        ConstructKind::BooleanConstructor,
        ConstructKind::BooleanTest,
        ConstructKind::NumberConstructor,
        ConstructKind::NumberTest,
        ConstructKind::NullConstructor,
        ConstructKind::NullTest,
        ConstructKind::ObjectNodeConstructor,
        ConstructKind::ObjectNodeTest,
        ConstructKind::SchemaFacetTest,
        ConstructKind::AnyKindTestWildcard,
        ConstructKind::AnyKindTestKeyName,
        ConstructKind::TextTestKeyName,
    ];

    /// The rule gating this construct, if any.
    pub fn rule(self) -> Option<ConformanceRule> {
        use ConstructKind as K;
        let rule = match self {
            K::VersionDecl | K::ValidateExpr | K::ForwardAxis => XQUERY_1_0,
            K::VersionDeclEncoding => XQUERY_3_0,
            K::ValidateExprType | K::Annotation | K::TryCatchExpr | K::SwitchExpr => {
                XQUERY_3_0_OR_MARKLOGIC_6_0
            }
            K::MapConstructor => XQUERY_3_1,
            K::CatchClause
            | K::CompatibilityAnnotation
            | K::NamespaceAxis
            | K::PropertyAxis
            | K::StylesheetImport
            | K::TransactionSeparator
            | K::ValidateAs
            | K::BinaryConstructor
            | K::BinaryTest => MARKLOGIC_6_0_ONLY,
            K::AttributeDeclTest
            | K::ComplexTypeTest
            | K::ElementDeclTest
            | K::SchemaComponentTest
            | K::SchemaParticleTest
            | K::SchemaRootTest
            | K::SchemaTypeTest
            | K::SimpleTypeTest => MARKLOGIC_7_0_ONLY,
            K::ArrayConstructor
            | K::ArrayTest
            | K::BooleanConstructor
            | K::BooleanTest
            | K::NumberConstructor
            | K::NumberTest
            | K::NullConstructor
            | K::NullTest
            | K::ObjectNodeConstructor
            | K::ObjectNodeTest
            | K::SchemaFacetTest
            | K::AnyKindTestWildcard
            | K::AnyKindTestKeyName
            | K::TextTestKeyName => MARKLOGIC_8_0_ONLY,
        };
        Some(rule)
    }

    /// Kind of the token diagnostics are anchored at. Key names anchor at
    /// the whole string literal, which opens with
    /// [`Tag::StringLiteralStart`].
    ///
    /// `None` for [`ConstructKind::ForwardAxis`], which anchors at
    /// whichever axis keyword was used.
    pub fn anchor_tag(self) -> Option<Tag> {
        use ConstructKind as K;
        let tag = match self {
            K::VersionDecl => Tag::XQuery,
            K::ValidateExpr => Tag::Validate,
            K::ForwardAxis => return None,
            K::VersionDeclEncoding => Tag::Encoding,
            K::ValidateExprType => Tag::Type,
            K::Annotation => Tag::AnnotationIndicator,
            K::TryCatchExpr => Tag::Try,
            K::SwitchExpr => Tag::Switch,
            K::MapConstructor => Tag::Map,
            K::CatchClause => Tag::Catch,
            K::CompatibilityAnnotation => Tag::Private,
            K::NamespaceAxis => Tag::Namespace,
            K::PropertyAxis => Tag::Property,
            K::StylesheetImport => Tag::Import,
            K::TransactionSeparator => Tag::Separator,
            K::ValidateAs => Tag::As,
            K::BinaryConstructor | K::BinaryTest => Tag::Binary,
            K::AttributeDeclTest => Tag::AttributeDecl,
            K::ComplexTypeTest => Tag::ComplexType,
            K::ElementDeclTest => Tag::ElementDecl,
            K::SchemaComponentTest => Tag::SchemaComponent,
            K::SchemaParticleTest => Tag::SchemaParticle,
            K::SchemaRootTest => Tag::SchemaRoot,
            K::SchemaTypeTest => Tag::SchemaType,
            K::SimpleTypeTest => Tag::SimpleType,
            K::ArrayConstructor | K::ArrayTest => Tag::ArrayNode,
            K::BooleanConstructor | K::BooleanTest => Tag::BooleanNode,
            K::NumberConstructor | K::NumberTest => Tag::NumberNode,
            K::NullConstructor | K::NullTest => Tag::NullNode,
            K::ObjectNodeConstructor | K::ObjectNodeTest => Tag::ObjectNode,
            K::SchemaFacetTest => Tag::SchemaFacet,
            K::AnyKindTestWildcard => Tag::Star,
            K::AnyKindTestKeyName | K::TextTestKeyName => Tag::StringLiteralStart,
        };
        Some(tag)
    }

    pub fn name(self) -> &'static str {
        use ConstructKind as K;
        match self {
            K::VersionDecl => "version declaration",
            K::ValidateExpr => "validate expression",
            K::ForwardAxis => "forward axis",
            K::VersionDeclEncoding => "encoding-only version declaration",
            K::ValidateExprType => "validate type expression",
            K::Annotation => "annotation",
            K::TryCatchExpr => "try/catch expression",
            K::SwitchExpr => "switch expression",
            K::MapConstructor => "map constructor",
            K::CatchClause => "catch clause with a variable",
            K::CompatibilityAnnotation => "private declaration",
            K::NamespaceAxis => "namespace axis",
            K::PropertyAxis => "property axis",
            K::StylesheetImport => "stylesheet import",
            K::TransactionSeparator => "transaction separator",
            K::ValidateAs => "validate as expression",
            K::BinaryConstructor => "binary constructor",
            K::BinaryTest => "binary test",
            K::AttributeDeclTest => "attribute-decl test",
            K::ComplexTypeTest => "complex-type test",
            K::ElementDeclTest => "element-decl test",
            K::SchemaComponentTest => "schema-component test",
            K::SchemaParticleTest => "schema-particle test",
            K::SchemaRootTest => "schema-root test",
            K::SchemaTypeTest => "schema-type test",
            K::SimpleTypeTest => "simple-type test",
            K::ArrayConstructor => "array-node constructor",
            K::ArrayTest => "array-node test",
            K::BooleanConstructor => "boolean-node constructor",
            K::BooleanTest => "boolean-node test",
            K::NumberConstructor => "number-node constructor",
            K::NumberTest => "number-node test",
            K::NullConstructor => "null-node constructor",
            K::NullTest => "null-node test",
            K::ObjectNodeConstructor => "object-node constructor",
            K::ObjectNodeTest => "object-node test",
            K::SchemaFacetTest => "schema-facet test",
            K::AnyKindTestWildcard => "node(*) test",
            K::AnyKindTestKeyName => "node test with a key name",
            K::TextTestKeyName => "text test with a key name",
        }
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An occurrence of a construct in a source buffer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Construct {
    pub kind: ConstructKind,
    /// The tokens recognised as the construct.
    pub span: Span,
    /// The token a diagnostic should point at. Always within `span`.
    pub anchor: Span,
}

/// The outcome of checking one construct against one target.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Conformance {
    pub kind: ConstructKind,
    pub conforms: bool,
    pub rule: Option<ConformanceRule>,
    /// The rule's message, or empty for an ungated construct.
    pub message: String,
    pub anchor: Span,
    pub target: Target,
}

impl Conformance {
    /// The diagnostic to report, or `None` if the construct conforms.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        if self.conforms {
            return None;
        }
        let rule = self.rule?;
        Some(
            Diagnostic::error(rule.code)
                .with_message(self.message.clone())
                .with_label(self.anchor, format!("{} not available in {}", self.kind, self.target)),
        )
    }
}

/// Check a construct against a target.
///
/// Constructs without a rule always conform.
pub fn check(construct: &Construct, target: &Target) -> Conformance {
    let rule = construct.kind.rule();
    let conforms = rule.is_none_or(|rule| rule.conforms_to(target));
    tracing::trace!(
        kind = ?construct.kind,
        span = %construct.span,
        %target,
        conforms,
        "checked construct"
    );
    Conformance {
        kind: construct.kind,
        conforms,
        rule,
        message: rule.map(|rule| rule.error_message()).unwrap_or_default(),
        anchor: construct.anchor,
        target: *target,
    }
}

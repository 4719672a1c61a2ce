use super::*;
use pretty_assertions::assert_eq;
use xq_lexer_core::tokenize;

fn constructs(source: &str) -> Vec<(ConstructKind, Span, Span)> {
    find_constructs(source, &tokenize(source))
        .into_iter()
        .map(|c| (c.kind, c.span, c.anchor))
        .collect()
}

fn kinds(source: &str) -> Vec<ConstructKind> {
    constructs(source).into_iter().map(|(kind, ..)| kind).collect()
}

fn implementation(id: &str) -> &'static Implementation {
    match Implementation::parse(id) {
        Some(imp) => imp,
        None => panic!("unknown implementation {id}"),
    }
}

fn check_source(source: &str, id: &str, version: VersionLabel) -> Vec<Diagnostic> {
    check_module(source, &tokenize(source), implementation(id), version)
}

// === find_constructs ===

#[test]
fn encoding_only_version_decl() {
    assert_eq!(
        constructs("xquery encoding \"latin1\";"),
        [(ConstructKind::VersionDeclEncoding, Span::new(0, 15), Span::new(7, 15))]
    );
    assert_eq!(
        kinds("xquery version \"1.0\" encoding \"latin1\";"),
        [ConstructKind::VersionDecl]
    );
}

#[test]
fn validate_type() {
    assert_eq!(
        constructs("validate type xs:int { 1 }"),
        [(ConstructKind::ValidateExprType, Span::new(0, 13), Span::new(9, 13))]
    );
    assert_eq!(kinds("validate strict { 1 }"), [ConstructKind::ValidateExpr]);
}

#[test]
fn version_decl_anchors_at_xquery() {
    assert_eq!(
        constructs("xquery version \"1.0\";"),
        [(ConstructKind::VersionDecl, Span::new(0, 14), Span::new(0, 6))]
    );
}

#[test]
fn validate_forms() {
    assert_eq!(
        constructs("validate { 1 }"),
        [(ConstructKind::ValidateExpr, Span::new(0, 10), Span::new(0, 8))]
    );
    assert_eq!(kinds("validate lax { 1 }"), [ConstructKind::ValidateExpr]);
    assert_eq!(
        constructs("validate as xs:int { 1 }"),
        [(ConstructKind::ValidateAs, Span::new(0, 11), Span::new(9, 11))]
    );
}

#[test]
fn forward_axes() {
    assert_eq!(
        constructs("child::a/descendant-or-self::b"),
        [
            (ConstructKind::ForwardAxis, Span::new(0, 7), Span::new(0, 5)),
            (ConstructKind::ForwardAxis, Span::new(9, 29), Span::new(9, 27)),
        ]
    );
    assert_eq!(
        kinds("self::a, attribute::b, following::c, following-sibling::d, descendant::e"),
        [ConstructKind::ForwardAxis; 5]
    );
    assert!(kinds("parent::a, ancestor::b, preceding::c").is_empty());
    assert!(kinds("child").is_empty());
}

#[test]
fn marklogic_axes() {
    assert_eq!(
        constructs("namespace::a"),
        [(ConstructKind::NamespaceAxis, Span::new(0, 11), Span::new(0, 9))]
    );
    assert_eq!(
        constructs("property::a"),
        [(ConstructKind::PropertyAxis, Span::new(0, 10), Span::new(0, 8))]
    );
    assert!(kinds("declare namespace a = \"urn:a\";").is_empty());
}

#[test]
fn catch_clause_with_variable() {
    assert_eq!(
        constructs("try { 1 } catch ($e) { 2 }"),
        [
            (ConstructKind::TryCatchExpr, Span::new(0, 5), Span::new(0, 3)),
            (ConstructKind::CatchClause, Span::new(10, 17), Span::new(10, 15)),
        ]
    );
    assert_eq!(kinds("try { 1 } catch err:XPTY0004 { 2 }"), [ConstructKind::TryCatchExpr]);
}

#[test]
fn marklogic_prolog_constructs() {
    assert_eq!(
        constructs("declare private function local:f() { 1 };"),
        [(ConstructKind::CompatibilityAnnotation, Span::new(0, 15), Span::new(8, 15))]
    );
    assert_eq!(
        constructs("import stylesheet at \"a.xsl\";"),
        [(ConstructKind::StylesheetImport, Span::new(0, 17), Span::new(0, 6))]
    );
    assert!(kinds("import module namespace a = \"urn:a\";").is_empty());
}

#[test]
fn transaction_separator() {
    assert_eq!(
        constructs("xquery version \"1.0-ml\"; 1; xquery version \"1.0-ml\"; 2"),
        [
            (ConstructKind::VersionDecl, Span::new(0, 14), Span::new(0, 6)),
            (ConstructKind::TransactionSeparator, Span::new(26, 34), Span::new(26, 27)),
            (ConstructKind::VersionDecl, Span::new(28, 42), Span::new(28, 34)),
        ]
    );
    assert_eq!(kinds("xquery version \"1.0\"; 1"), [ConstructKind::VersionDecl]);
}

#[test]
fn marklogic_schema_component_tests() {
    assert_eq!(
        kinds(
            "complex-type(), element-decl(), schema-component(), schema-particle(), \
             schema-root(), schema-type(), simple-type(), schema-facet()"
        ),
        [
            ConstructKind::ComplexTypeTest,
            ConstructKind::ElementDeclTest,
            ConstructKind::SchemaComponentTest,
            ConstructKind::SchemaParticleTest,
            ConstructKind::SchemaRootTest,
            ConstructKind::SchemaTypeTest,
            ConstructKind::SimpleTypeTest,
            ConstructKind::SchemaFacetTest,
        ]
    );
}

#[test]
fn marklogic_json_nodes() {
    assert_eq!(
        kinds(
            "boolean-node { true() }, boolean-node(), number-node { 1 }, number-node(), \
             null-node { }, null-node()"
        ),
        [
            ConstructKind::BooleanConstructor,
            ConstructKind::BooleanTest,
            ConstructKind::NumberConstructor,
            ConstructKind::NumberTest,
            ConstructKind::NullConstructor,
            ConstructKind::NullTest,
        ]
    );
}

#[test]
fn key_names_anchor_at_string_literal() {
    assert_eq!(
        constructs("node(\"key\")"),
        [(ConstructKind::AnyKindTestKeyName, Span::new(0, 10), Span::new(5, 10))]
    );
    assert_eq!(
        constructs("text('a''b')"),
        [(ConstructKind::TextTestKeyName, Span::new(0, 11), Span::new(5, 11))]
    );
    assert_eq!(
        constructs("node(\"ab"),
        [(ConstructKind::AnyKindTestKeyName, Span::new(0, 8), Span::new(5, 8))]
    );
    assert!(kinds("text()").is_empty());
}

#[test]
fn anchors_start_at_their_anchor_tag() {
    let source = "xquery version \"1.0-ml\";\n\
        declare private variable $v := validate as t { child::a };\n\
        import stylesheet at \"s.xsl\";\n\
        try { namespace::a, property::b } catch ($e) { object-node { } },\n\
        node(\"k\"), text(\"k\"), node(*), binary(), schema-facet(); \
        xquery version \"1.0-ml\"; 2";
    let tokens = tokenize(source);
    let found = find_constructs(source, &tokens);
    assert_eq!(found.len(), 17);
    for construct in found {
        let Some(token) = tokens.iter().find(|t| t.start == construct.anchor.start) else {
            panic!("no token at {}", construct.anchor);
        };
        match construct.kind.anchor_tag() {
            Some(tag) => assert_eq!(token.tag, tag, "{}", construct.kind),
            None => assert!(token.tag.is_axis(), "{}", construct.kind),
        }
        assert!(construct.span.start <= construct.anchor.start);
        assert!(construct.anchor.end <= construct.span.end);
    }
}

#[test]
fn comments_are_scanned_as_code() {
    assert_eq!(kinds("(: try { :) 1"), [ConstructKind::TryCatchExpr]);
}

#[test]
fn annotations() {
    assert_eq!(
        constructs("declare %private function local:f() { 1 };"),
        [(ConstructKind::Annotation, Span::new(8, 16), Span::new(8, 9))]
    );
    assert_eq!(
        constructs("%an:x"),
        [(ConstructKind::Annotation, Span::new(0, 5), Span::new(0, 1))]
    );
    assert_eq!(
        constructs("%"),
        [(ConstructKind::Annotation, Span::new(0, 1), Span::new(0, 1))]
    );
}

#[test]
fn keyword_constructs() {
    assert_eq!(
        constructs("try { 1 } catch * { 2 }"),
        [(ConstructKind::TryCatchExpr, Span::new(0, 5), Span::new(0, 3))]
    );
    assert_eq!(
        constructs("switch ($x) case 1 return 2 default return 3"),
        [(ConstructKind::SwitchExpr, Span::new(0, 8), Span::new(0, 6))]
    );
    assert_eq!(
        constructs("map{}"),
        [(ConstructKind::MapConstructor, Span::new(0, 4), Span::new(0, 3))]
    );
}

#[test]
fn marklogic_node_constructors_and_tests() {
    assert_eq!(
        kinds("array-node { 1 }, array-node(), object-node { }, object-node()"),
        [
            ConstructKind::ArrayConstructor,
            ConstructKind::ArrayTest,
            ConstructKind::ObjectNodeConstructor,
            ConstructKind::ObjectNodeTest,
        ]
    );
    assert_eq!(
        kinds("binary { \"0F\" } instance of binary()"),
        [ConstructKind::BinaryConstructor, ConstructKind::BinaryTest]
    );
    assert_eq!(kinds("attribute-decl()"), [ConstructKind::AttributeDeclTest]);
}

#[test]
fn any_kind_wildcard_anchors_at_star() {
    assert_eq!(
        constructs("node(*)"),
        [(ConstructKind::AnyKindTestWildcard, Span::new(0, 6), Span::new(5, 6))]
    );
    assert_eq!(
        constructs("node( * )"),
        [(ConstructKind::AnyKindTestWildcard, Span::new(0, 7), Span::new(6, 7))]
    );
    assert!(kinds("node()").is_empty());
}

#[test]
fn names_are_not_constructs() {
    assert!(kinds("map:get($m, \"a\")").is_empty());
    assert!(kinds("$map").is_empty());
    assert!(kinds("x:map { }").is_empty());
    assert!(kinds("$try").is_empty());
    assert!(kinds("map").is_empty());
}

#[test]
fn string_contents_are_not_constructs() {
    assert!(kinds("\"try { map { } }\"").is_empty());
    assert!(kinds("'%private'").is_empty());
}

#[test]
fn constructs_in_source_order() {
    assert_eq!(
        kinds("declare %private variable $v := map { \"a\": (try { 1 } catch * { 2 }) };"),
        [
            ConstructKind::Annotation,
            ConstructKind::MapConstructor,
            ConstructKind::TryCatchExpr,
        ]
    );
}

// === version_decl ===

#[test]
fn version_decl_parts() {
    let source = "xquery version \"1.0\" encoding \"latin1\";";
    let decl = version_decl(source, &tokenize(source));
    assert_eq!(
        decl,
        Some(VersionDecl {
            keyword: Span::new(0, 6),
            version: Some("1.0"),
            version_span: Some(Span::new(16, 19)),
            encoding: Some(Span::new(21, 29)),
        })
    );
}

#[test]
fn version_decl_empty_version() {
    let source = "xquery version \"\";";
    let decl = version_decl(source, &tokenize(source));
    assert_eq!(decl.and_then(|d| d.version), Some(""));
    assert_eq!(decl.and_then(|d| d.version_span), Some(Span::new(16, 16)));
}

#[test]
fn version_decl_must_open_the_module() {
    let source = "1, xquery version \"1.0\";";
    assert_eq!(version_decl(source, &tokenize(source)), None);
    assert_eq!(version_decl("", &tokenize("")), None);
    let source = "xquery";
    assert_eq!(version_decl(source, &tokenize(source)), None);
}

#[test]
fn version_decl_leading_whitespace() {
    let source = "\n  xquery version '3.0';";
    let decl = version_decl(source, &tokenize(source));
    assert_eq!(decl.and_then(|d| d.version), Some("3.0"));
    assert_eq!(decl.map(|d| d.keyword), Some(Span::new(3, 9)));
}

// === check_version_decl ===

#[test]
fn supported_version_has_no_diagnostic() {
    for (source, id) in [
        ("xquery version \"1.0-ml\"; 1", "marklogic/v8"),
        ("xquery version \"3.1\"; 1", "w3c"),
        ("xquery version \"3.0\"; 1", "saxon/EE/v9.4"),
        ("xquery encoding \"utf-8\"; 1", "w3c"),
        ("1", "w3c"),
    ] {
        let diagnostic = check_version_decl(source, &tokenize(source), implementation(id));
        assert_eq!(diagnostic, None, "{source} on {id}");
    }
}

#[test]
fn unsupported_version_is_xqst0031() {
    let source = "xquery version \"1.0-ml\"; 1";
    let Some(diagnostic) =
        check_version_decl(source, &tokenize(source), implementation("saxon/EE/v9.7"))
    else {
        panic!("expected XQST0031");
    };
    assert_eq!(diagnostic.code, ErrorCode::XQST0031);
    assert_eq!(
        diagnostic.message,
        "The implementation does not support this XQuery version."
    );
    assert_eq!(diagnostic.primary_span(), Some(Span::new(16, 22)));
    assert_eq!(diagnostic.notes, ["Saxon EE 9.7 supports 1.0, 3.0, 3.1"]);
}

#[test]
fn unknown_and_empty_versions_are_unsupported() {
    for (source, at) in [
        ("xquery version \"2.0\";", Span::new(16, 19)),
        ("xquery version \"\";", Span::new(16, 16)),
        ("xquery version \"1.0-update\";", Span::new(16, 26)),
    ] {
        let diagnostic = check_version_decl(source, &tokenize(source), implementation("w3c"));
        assert_eq!(diagnostic.and_then(|d| d.primary_span()), Some(at), "{source}");
    }
}

// === check_module ===

#[test]
fn declared_version_selects_dialect() {
    let source = "xquery version \"1.0-ml\"; try { 1 } catch * { 2 }";
    assert!(check_source(source, "marklogic/v8", VersionLabel::V1_0).is_empty());
}

#[test]
fn configured_version_applies_without_declaration() {
    let source = "try { 1 } catch * { 2 }";
    assert!(check_source(source, "marklogic/v8", VersionLabel::V1_0_ML).is_empty());

    let diagnostics = check_source(source, "marklogic/v8", VersionLabel::V1_0);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::XPST0003);
    assert_eq!(diagnostics[0].primary_span(), Some(Span::new(0, 3)));
    assert_eq!(
        diagnostics[0].message,
        "XPST0003: This expression requires XQuery 3.0 or later, or MarkLogic 6.0 or later with XQuery version '1.0-ml'."
    );
}

#[test]
fn unsupported_declaration_falls_back_to_configured_version() {
    let source = "xquery version \"1.0-ml\"; map { }";
    let diagnostics = check_source(source, "saxon/EE/v9.7", VersionLabel::V3_1);
    let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, [ErrorCode::XQST0031]);
}

#[test]
fn bad_characters_are_syntax_errors() {
    let diagnostics = check_source("map { } # 1", "w3c", VersionLabel::V1_0);
    let found: Vec<_> = diagnostics
        .iter()
        .map(|d| (d.code, d.primary_span(), d.message.as_str()))
        .collect();
    assert_eq!(
        found,
        [
            (
                ErrorCode::XPST0003,
                Some(Span::new(0, 3)),
                "XPST0003: This expression requires XQuery 3.1 or later."
            ),
            (ErrorCode::XPST0003, Some(Span::new(8, 9)), "unexpected character `#`"),
        ]
    );
}

#[test]
fn marklogic_module_on_w3c() {
    let source = "declare private variable $x := null-node { };";
    let diagnostics = check_source(source, "w3c", VersionLabel::V3_1);
    let found: Vec<_> = diagnostics
        .iter()
        .map(|d| (d.primary_span(), d.message.as_str()))
        .collect();
    assert_eq!(
        found,
        [
            (
                Some(Span::new(8, 15)),
                "XPST0003: This expression requires MarkLogic 6.0 or later with XQuery version '1.0-ml'."
            ),
            (
                Some(Span::new(31, 40)),
                "XPST0003: This expression requires MarkLogic 8.0 or later with XQuery version '1.0-ml'."
            ),
        ]
    );
    assert!(check_source(source, "marklogic/v8", VersionLabel::V1_0_ML).is_empty());
}

#[test]
fn xquery_1_0_constructs_are_clean_everywhere() {
    let source = "xquery version \"1.0\"; validate { child::a }";
    for id in ["w3c", "marklogic/v6", "saxon/EE/v9.4"] {
        assert!(check_source(source, id, VersionLabel::V1_0).is_empty(), "{id}");
    }
}

#[test]
fn conforming_module_is_clean() {
    let source = "xquery version \"3.1\";\ndeclare %private function local:f() { map { } };\nlocal:f()";
    assert!(check_source(source, "w3c", VersionLabel::V1_0).is_empty());
}

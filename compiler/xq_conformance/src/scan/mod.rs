//! Recognising constructs in a token stream.
//!
//! Constructs are found from short keyword-anchored token patterns with
//! whitespace skipped. This is enough to locate every gated construct
//! without building a syntax tree.

use xq_diagnostic::{Diagnostic, ErrorCode};
use xq_dialect::{Implementation, VersionLabel, XQueryVersion};
use xq_ir::Span;
use xq_lexer_core::{Tag, Token};

use crate::{check, Construct, ConstructKind};

fn span(token: &Token) -> Span {
    Span::new(token.start, token.end)
}

/// Find every gated construct in `tokens`, in source order.
///
/// `tokens` is a full scan of `source`, as produced by
/// [`xq_lexer_core::tokenize`].
///
/// # Limitations
///
/// The lexer does not recognise `(: ... :)` comments, so keywords inside a
/// comment are matched like code: `(: try { :)` yields a
/// [`ConstructKind::TryCatchExpr`].
pub fn find_constructs(source: &str, tokens: &[Token]) -> Vec<Construct> {
    let significant: Vec<&Token> = tokens.iter().filter(|t| !t.tag.is_trivia()).collect();
    let tag_at = |i: usize| significant.get(i).map(|t| t.tag);

    let mut constructs = Vec::new();
    for (i, token) in significant.iter().enumerate() {
        // `$map`, `x:map` and similar are names, not keywords.
        if i > 0
            && matches!(
                tag_at(i - 1),
                Some(Tag::VariableIndicator | Tag::QNameSeparator)
            )
        {
            continue;
        }
        let next = tag_at(i + 1);
        let third = tag_at(i + 2);
        // (kind, anchor index, last index)
        let found = match (token.tag, next) {
            (Tag::XQuery, Some(Tag::Version)) => Some((ConstructKind::VersionDecl, i, i + 1)),
            (Tag::XQuery, Some(Tag::Encoding)) => {
                Some((ConstructKind::VersionDeclEncoding, i + 1, i + 1))
            }
            (Tag::Validate, Some(Tag::BlockOpen | Tag::Lax | Tag::Strict)) => {
                Some((ConstructKind::ValidateExpr, i, i + 1))
            }
            (Tag::Validate, Some(Tag::Type)) => {
                Some((ConstructKind::ValidateExprType, i + 1, i + 1))
            }
            (Tag::Validate, Some(Tag::As)) => Some((ConstructKind::ValidateAs, i + 1, i + 1)),
            (
                Tag::Child
                | Tag::Descendant
                | Tag::Attribute
                | Tag::SelfAxis
                | Tag::DescendantOrSelf
                | Tag::FollowingSibling
                | Tag::Following,
                Some(Tag::AxisSeparator),
            ) => Some((ConstructKind::ForwardAxis, i, i + 1)),
            (Tag::Namespace, Some(Tag::AxisSeparator)) => {
                Some((ConstructKind::NamespaceAxis, i, i + 1))
            }
            (Tag::Property, Some(Tag::AxisSeparator)) => {
                Some((ConstructKind::PropertyAxis, i, i + 1))
            }
            (Tag::AnnotationIndicator, _) => {
                Some((ConstructKind::Annotation, i, annotation_end(&significant, i)))
            }
            (Tag::Declare, Some(Tag::Private)) => {
                Some((ConstructKind::CompatibilityAnnotation, i + 1, i + 1))
            }
            (Tag::Import, Some(Tag::Stylesheet)) => {
                Some((ConstructKind::StylesheetImport, i, i + 1))
            }
            (Tag::Separator, Some(Tag::XQuery))
                if matches!(third, Some(Tag::Version | Tag::Encoding)) =>
            {
                Some((ConstructKind::TransactionSeparator, i, i + 1))
            }
            (Tag::Try, Some(Tag::BlockOpen)) => Some((ConstructKind::TryCatchExpr, i, i + 1)),
            (Tag::Catch, Some(Tag::ParenthesisOpen)) => {
                Some((ConstructKind::CatchClause, i, i + 1))
            }
            (Tag::Switch, Some(Tag::ParenthesisOpen)) => {
                Some((ConstructKind::SwitchExpr, i, i + 1))
            }
            (Tag::Map, Some(Tag::BlockOpen)) => Some((ConstructKind::MapConstructor, i, i + 1)),
            (Tag::Node, Some(Tag::ParenthesisOpen)) if third == Some(Tag::Star) => {
                Some((ConstructKind::AnyKindTestWildcard, i + 2, i + 2))
            }
            (Tag::Node, Some(Tag::ParenthesisOpen))
                if third == Some(Tag::StringLiteralStart) =>
            {
                Some((ConstructKind::AnyKindTestKeyName, i + 2, i + 2))
            }
            (Tag::Text, Some(Tag::ParenthesisOpen))
                if third == Some(Tag::StringLiteralStart) =>
            {
                Some((ConstructKind::TextTestKeyName, i + 2, i + 2))
            }
            (tag, Some(Tag::BlockOpen)) => node_constructor(tag).map(|kind| (kind, i, i + 1)),
            (tag, Some(Tag::ParenthesisOpen)) => node_test(tag).map(|kind| (kind, i, i + 1)),
            _ => None,
        };

        let Some((kind, anchor, last)) = found else {
            continue;
        };
        // A string literal anchor covers the literal up to its closing quote.
        let anchor_end = if tag_at(anchor) == Some(Tag::StringLiteralStart) {
            string_end(&significant, anchor)
        } else {
            anchor
        };
        let last = last.max(anchor_end);
        let (Some(first), Some(anchor_last), Some(last)) = (
            significant.get(anchor),
            significant.get(anchor_end),
            significant.get(last),
        ) else {
            continue;
        };
        let construct = Construct {
            kind,
            span: Span::new(token.start, last.end),
            anchor: Span::new(first.start, anchor_last.end),
        };
        tracing::trace!(
            kind = ?construct.kind,
            text = source.get(construct.span.to_range()).unwrap_or(""),
            "found construct"
        );
        constructs.push(construct);
    }
    constructs
}

/// The constructor a node kind keyword opens when followed by `{`.
fn node_constructor(tag: Tag) -> Option<ConstructKind> {
    let kind = match tag {
        Tag::ArrayNode => ConstructKind::ArrayConstructor,
        Tag::BooleanNode => ConstructKind::BooleanConstructor,
        Tag::NumberNode => ConstructKind::NumberConstructor,
        Tag::NullNode => ConstructKind::NullConstructor,
        Tag::ObjectNode => ConstructKind::ObjectNodeConstructor,
        Tag::Binary => ConstructKind::BinaryConstructor,
        _ => return None,
    };
    Some(kind)
}

/// The kind test a keyword opens when followed by `(`.
fn node_test(tag: Tag) -> Option<ConstructKind> {
    let kind = match tag {
        Tag::ArrayNode => ConstructKind::ArrayTest,
        Tag::BooleanNode => ConstructKind::BooleanTest,
        Tag::NumberNode => ConstructKind::NumberTest,
        Tag::NullNode => ConstructKind::NullTest,
        Tag::ObjectNode => ConstructKind::ObjectNodeTest,
        Tag::Binary => ConstructKind::BinaryTest,
        Tag::AttributeDecl => ConstructKind::AttributeDeclTest,
        Tag::ComplexType => ConstructKind::ComplexTypeTest,
        Tag::ElementDecl => ConstructKind::ElementDeclTest,
        Tag::SchemaComponent => ConstructKind::SchemaComponentTest,
        Tag::SchemaParticle => ConstructKind::SchemaParticleTest,
        Tag::SchemaRoot => ConstructKind::SchemaRootTest,
        Tag::SchemaType => ConstructKind::SchemaTypeTest,
        Tag::SimpleType => ConstructKind::SimpleTypeTest,
        Tag::SchemaFacet => ConstructKind::SchemaFacetTest,
        _ => return None,
    };
    Some(kind)
}

/// Index of the last token of the string literal opening at `i`.
fn string_end(significant: &[&Token], i: usize) -> usize {
    let mut end = i;
    for (j, token) in significant.iter().enumerate().skip(i + 1) {
        match token.tag {
            Tag::StringLiteralEnd => return j,
            Tag::StringLiteralStart => break,
            tag if tag.is_string_part() => end = j,
            _ => break,
        }
    }
    end
}

/// Index of the last token of the annotation name after `%` at `i`.
fn annotation_end(significant: &[&Token], i: usize) -> usize {
    let is_name = |j: usize| {
        significant
            .get(j)
            .is_some_and(|t| t.tag == Tag::NCName || t.tag.is_keyword())
    };
    if !is_name(i + 1) {
        return i;
    }
    let qname_separator = significant.get(i + 2).map(|t| t.tag) == Some(Tag::QNameSeparator);
    if qname_separator && is_name(i + 3) {
        i + 3
    } else {
        i + 1
    }
}

/// A module's leading `xquery version "..." encoding "..."` declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VersionDecl<'a> {
    /// The `xquery` keyword.
    pub keyword: Span,
    /// Text of the version string, `""` for an empty literal.
    pub version: Option<&'a str>,
    /// Span of the version string's content. Zero-width for `""`.
    pub version_span: Option<Span>,
    /// The `encoding` keyword.
    pub encoding: Option<Span>,
}

/// Parse the version declaration opening the module, if there is one.
pub fn version_decl<'a>(source: &'a str, tokens: &[Token]) -> Option<VersionDecl<'a>> {
    let mut significant = tokens.iter().filter(|t| !t.tag.is_trivia());
    let keyword = significant.next().filter(|t| t.tag == Tag::XQuery)?;
    let mut decl = VersionDecl {
        keyword: span(keyword),
        version: None,
        version_span: None,
        encoding: None,
    };

    let mut next = significant.next()?;
    if next.tag == Tag::Version {
        let content = string_content(&mut significant)?;
        decl.version = Some(source.get(content.to_range())?);
        decl.version_span = Some(content);
        next = match significant.next() {
            Some(token) => token,
            None => return Some(decl),
        };
    }
    if next.tag == Tag::Encoding {
        decl.encoding = Some(span(next));
    }

    (decl.version.is_some() || decl.encoding.is_some()).then_some(decl)
}

/// Span between the quotes of the string literal starting the iterator.
fn string_content<'t>(tokens: &mut impl Iterator<Item = &'t Token>) -> Option<Span> {
    let open = tokens.next().filter(|t| t.tag == Tag::StringLiteralStart)?;
    let mut end = open.end;
    for token in tokens.by_ref() {
        match token.tag {
            Tag::StringLiteralEnd => return Some(Span::new(open.end, token.start)),
            tag if tag.is_string_part() => end = token.end,
            _ => break,
        }
    }
    // Unterminated.
    Some(Span::new(open.end, end))
}

/// Check the declared version against the versions `implementation`
/// supports.
///
/// Reports `XQST0031` at the version string when the declared version is
/// unknown or unsupported. A module without a declared version never
/// produces a diagnostic.
pub fn check_version_decl(
    source: &str,
    tokens: &[Token],
    implementation: &Implementation,
) -> Option<Diagnostic> {
    let decl = version_decl(source, tokens)?;
    let (version, at) = decl.version.zip(decl.version_span)?;
    if declared_version(implementation, version).is_some() {
        return None;
    }

    let supported: Vec<&str> = implementation
        .versions()
        .iter()
        .map(|label| label.as_str())
        .collect();
    tracing::debug!(version, implementation = implementation.id, "unsupported version");
    Some(
        Diagnostic::error(ErrorCode::XQST0031)
            .with_message("The implementation does not support this XQuery version.")
            .with_label(at, format!("not supported by {implementation}"))
            .with_note(format!("{implementation} supports {}", supported.join(", "))),
    )
}

/// The declared version, if `implementation` supports it.
fn declared_version(implementation: &Implementation, declared: &str) -> Option<XQueryVersion> {
    let xquery = XQueryVersion::parse(declared)?;
    implementation
        .versions()
        .iter()
        .any(|label| label.xquery() == xquery)
        .then_some(xquery)
}

/// Run every check over a scanned module.
///
/// The module is checked against `implementation` running the version it
/// declares when the implementation supports it, and `version` otherwise.
/// Unrecognised characters are reported as `XPST0003`. Diagnostics are
/// ordered by position.
#[tracing::instrument(level = "debug", skip_all, fields(implementation = implementation.id, %version))]
pub fn check_module(
    source: &str,
    tokens: &[Token],
    implementation: &Implementation,
    version: VersionLabel,
) -> Vec<Diagnostic> {
    let declared = version_decl(source, tokens)
        .and_then(|decl| decl.version)
        .and_then(|declared| declared_version(implementation, declared));
    let effective = match declared {
        Some(xquery) if xquery != version.xquery() => VersionLabel::new(xquery),
        _ => version,
    };
    let target = implementation.target(effective);
    tracing::debug!(%target, "effective target");

    let mut diagnostics: Vec<Diagnostic> = tokens
        .iter()
        .filter(|t| t.tag == Tag::BadCharacter)
        .map(|t| {
            Diagnostic::error(ErrorCode::XPST0003)
                .with_message(format!("unexpected character `{}`", t.text(source)))
                .with_label(span(t), "not valid here")
        })
        .collect();
    diagnostics.extend(check_version_decl(source, tokens, implementation));
    diagnostics.extend(
        find_constructs(source, tokens)
            .iter()
            .filter_map(|construct| check(construct, &target).to_diagnostic()),
    );
    diagnostics.sort_by_key(|d| d.primary_span().map(|span| span.start));
    diagnostics
}

#[cfg(test)]
mod tests;

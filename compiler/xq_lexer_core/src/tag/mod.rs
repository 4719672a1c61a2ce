//! Token kind registry.
//!
//! [`Tag`] is the closed set of token kinds the lexer can emit. Discriminants
//! are grouped into semantic ranges so classification is a range check:
//!
//! | range   | group                          |
//! |---------|--------------------------------|
//! | 0-31    | literals, string parts, names  |
//! | 32-79   | punctuation                    |
//! | 96-159  | keywords                       |
//! | 200     | trivia                         |
//! | 240     | errors                         |
//! | 255     | end of input                   |
//!
//! [`Tag::name`] is the stable identifier consumed by tree builders and
//! printed by tooling. It must not change once published.

/// Token kind.
///
/// `#[repr(u8)]` keeps tokens small and makes the semantic ranges above
/// observable through `as u8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    // === Literals: 0-31 ===
    /// `[0-9]+`
    IntegerLiteral = 0,
    /// `[0-9]+ "." [0-9]*` or `"." [0-9]+`
    DecimalLiteral = 1,
    /// Integer or decimal followed by an exponent with digits.
    DoubleLiteral = 2,
    /// Opening `"` or `'` of a string literal.
    StringLiteralStart = 3,
    /// Run of string content without the active quote or `&`.
    StringLiteralContents = 4,
    /// Closing quote of a string literal.
    StringLiteralEnd = 5,
    /// Doubled active quote inside a string literal.
    StringLiteralEscapedCharacter = 6,
    /// `&name;` inside a string literal. The name is not validated.
    PredefinedEntityReference = 7,
    /// `&` plus any name characters, without the terminating `;`.
    PartialEntityReference = 8,
    /// Name that is not a keyword.
    NCName = 16,

    // === Punctuation: 32-79 ===
    /// `%`
    AnnotationIndicator = 32,
    /// `*`
    Star = 33,
    /// `(`
    ParenthesisOpen = 34,
    /// `)`
    ParenthesisClose = 35,
    /// `{`
    BlockOpen = 36,
    /// `}`
    BlockClose = 37,
    /// `[`
    SquareOpen = 38,
    /// `]`
    SquareClose = 39,
    /// `,`
    Comma = 40,
    /// `;`
    Separator = 41,
    /// `$`
    VariableIndicator = 42,
    /// `:`
    QNameSeparator = 43,
    /// `=`
    Equal = 44,
    /// `<`
    LessThan = 45,
    /// `>`
    GreaterThan = 46,
    /// `+`
    Plus = 47,
    /// `-`
    Minus = 48,
    /// `?`
    Optional = 49,
    /// `|`
    Union = 50,
    /// `/`
    DirectDescendantsPath = 51,
    /// `@`
    AttributeSelector = 52,
    /// `.`
    ContextItem = 53,
    /// `:=`
    Assign = 54,
    /// `::`
    AxisSeparator = 55,
    /// `!=`
    NotEqual = 56,
    /// `<=`
    LessThanOrEqual = 57,
    /// `>=`
    GreaterThanOrEqual = 58,
    /// `//`
    AllDescendantsPath = 59,
    /// `..`
    ParentSelector = 60,
    /// `=>`
    ArrowFunction = 61,

    // === Keywords: 96-159 ===
    Ancestor = 96,
    AncestorOrSelf = 97,
    Array = 98,
    ArrayNode = 99,
    Attribute = 100,
    AttributeDecl = 101,
    Binary = 102,
    Case = 103,
    Catch = 104,
    Child = 105,
    Declare = 106,
    Default = 107,
    Descendant = 108,
    DescendantOrSelf = 109,
    Element = 110,
    Encoding = 111,
    Following = 112,
    FollowingSibling = 113,
    Function = 114,
    Import = 115,
    Lax = 116,
    Map = 117,
    Module = 118,
    Namespace = 119,
    Node = 120,
    ObjectNode = 121,
    Parent = 122,
    Preceding = 123,
    PrecedingSibling = 124,
    Return = 125,
    Schema = 126,
    /// `self` axis.
    SelfAxis = 127,
    Strict = 128,
    Switch = 129,
    Text = 130,
    Try = 131,
    Type = 132,
    Validate = 133,
    Variable = 134,
    Version = 135,
    XQuery = 136,
    As = 137,
    BooleanNode = 138,
    ComplexType = 139,
    ElementDecl = 140,
    NullNode = 141,
    NumberNode = 142,
    Private = 143,
    Property = 144,
    SchemaComponent = 145,
    SchemaFacet = 146,
    SchemaParticle = 147,
    SchemaRoot = 148,
    SchemaType = 149,
    SimpleType = 150,
    Stylesheet = 151,

    // === Trivia: 200 ===
    /// Maximal run of space, tab, CR and LF.
    WhiteSpace = 200,

    // === Errors: 240 ===
    /// A single code point no rule accepts.
    BadCharacter = 240,

    // === End of input ===
    /// Zero-width terminal marker. Reported as "no token type".
    Eof = 255,
}

impl Tag {
    /// Every keyword tag, in discriminant order.
    pub const KEYWORDS: &'static [Tag] = &[
        Tag::Ancestor,
        Tag::AncestorOrSelf,
        Tag::Array,
        Tag::ArrayNode,
        Tag::Attribute,
        Tag::AttributeDecl,
        Tag::Binary,
        Tag::Case,
        Tag::Catch,
        Tag::Child,
        Tag::Declare,
        Tag::Default,
        Tag::Descendant,
        Tag::DescendantOrSelf,
        Tag::Element,
        Tag::Encoding,
        Tag::Following,
        Tag::FollowingSibling,
        Tag::Function,
        Tag::Import,
        Tag::Lax,
        Tag::Map,
        Tag::Module,
        Tag::Namespace,
        Tag::Node,
        Tag::ObjectNode,
        Tag::Parent,
        Tag::Preceding,
        Tag::PrecedingSibling,
        Tag::Return,
        Tag::Schema,
        Tag::SelfAxis,
        Tag::Strict,
        Tag::Switch,
        Tag::Text,
        Tag::Try,
        Tag::Type,
        Tag::Validate,
        Tag::Variable,
        Tag::Version,
        Tag::XQuery,
        Tag::As,
        Tag::BooleanNode,
        Tag::ComplexType,
        Tag::ElementDecl,
        Tag::NullNode,
        Tag::NumberNode,
        Tag::Private,
        Tag::Property,
        Tag::SchemaComponent,
        Tag::SchemaFacet,
        Tag::SchemaParticle,
        Tag::SchemaRoot,
        Tag::SchemaType,
        Tag::SimpleType,
        Tag::Stylesheet,
    ];

    /// Stable identifier of this kind, e.g. `STRING_LITERAL_START`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::IntegerLiteral => "INTEGER_LITERAL",
            Self::DecimalLiteral => "DECIMAL_LITERAL",
            Self::DoubleLiteral => "DOUBLE_LITERAL",
            Self::StringLiteralStart => "STRING_LITERAL_START",
            Self::StringLiteralContents => "STRING_LITERAL_CONTENTS",
            Self::StringLiteralEnd => "STRING_LITERAL_END",
            Self::StringLiteralEscapedCharacter => "STRING_LITERAL_ESCAPED_CHARACTER",
            Self::PredefinedEntityReference => "PREDEFINED_ENTITY_REFERENCE",
            Self::PartialEntityReference => "PARTIAL_ENTITY_REFERENCE",
            Self::NCName => "NCNAME",
            Self::AnnotationIndicator => "ANNOTATION_INDICATOR",
            Self::Star => "STAR",
            Self::ParenthesisOpen => "PARENTHESIS_OPEN",
            Self::ParenthesisClose => "PARENTHESIS_CLOSE",
            Self::BlockOpen => "BLOCK_OPEN",
            Self::BlockClose => "BLOCK_CLOSE",
            Self::SquareOpen => "SQUARE_OPEN",
            Self::SquareClose => "SQUARE_CLOSE",
            Self::Comma => "COMMA",
            Self::Separator => "SEPARATOR",
            Self::VariableIndicator => "VARIABLE_INDICATOR",
            Self::QNameSeparator => "QNAME_SEPARATOR",
            Self::Equal => "EQUAL",
            Self::LessThan => "LESS_THAN",
            Self::GreaterThan => "GREATER_THAN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Optional => "OPTIONAL",
            Self::Union => "UNION",
            Self::DirectDescendantsPath => "DIRECT_DESCENDANTS_PATH",
            Self::AttributeSelector => "ATTRIBUTE_SELECTOR",
            Self::ContextItem => "CONTEXT_ITEM",
            Self::Assign => "ASSIGN_EQUAL",
            Self::AxisSeparator => "AXIS_SEPARATOR",
            Self::NotEqual => "NOT_EQUAL",
            Self::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            Self::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            Self::AllDescendantsPath => "ALL_DESCENDANTS_PATH",
            Self::ParentSelector => "PARENT_SELECTOR",
            Self::ArrowFunction => "ARROW",
            Self::Ancestor => "K_ANCESTOR",
            Self::AncestorOrSelf => "K_ANCESTOR_OR_SELF",
            Self::Array => "K_ARRAY",
            Self::ArrayNode => "K_ARRAY_NODE",
            Self::Attribute => "K_ATTRIBUTE",
            Self::AttributeDecl => "K_ATTRIBUTE_DECL",
            Self::Binary => "K_BINARY",
            Self::Case => "K_CASE",
            Self::Catch => "K_CATCH",
            Self::Child => "K_CHILD",
            Self::Declare => "K_DECLARE",
            Self::Default => "K_DEFAULT",
            Self::Descendant => "K_DESCENDANT",
            Self::DescendantOrSelf => "K_DESCENDANT_OR_SELF",
            Self::Element => "K_ELEMENT",
            Self::Encoding => "K_ENCODING",
            Self::Following => "K_FOLLOWING",
            Self::FollowingSibling => "K_FOLLOWING_SIBLING",
            Self::Function => "K_FUNCTION",
            Self::Import => "K_IMPORT",
            Self::Lax => "K_LAX",
            Self::Map => "K_MAP",
            Self::Module => "K_MODULE",
            Self::Namespace => "K_NAMESPACE",
            Self::Node => "K_NODE",
            Self::ObjectNode => "K_OBJECT_NODE",
            Self::Parent => "K_PARENT",
            Self::Preceding => "K_PRECEDING",
            Self::PrecedingSibling => "K_PRECEDING_SIBLING",
            Self::Return => "K_RETURN",
            Self::Schema => "K_SCHEMA",
            Self::SelfAxis => "K_SELF",
            Self::Strict => "K_STRICT",
            Self::Switch => "K_SWITCH",
            Self::Text => "K_TEXT",
            Self::Try => "K_TRY",
            Self::Type => "K_TYPE",
            Self::Validate => "K_VALIDATE",
            Self::Variable => "K_VARIABLE",
            Self::Version => "K_VERSION",
            Self::XQuery => "K_XQUERY",
            Self::As => "K_AS",
            Self::BooleanNode => "K_BOOLEAN_NODE",
            Self::ComplexType => "K_COMPLEX_TYPE",
            Self::ElementDecl => "K_ELEMENT_DECL",
            Self::NullNode => "K_NULL_NODE",
            Self::NumberNode => "K_NUMBER_NODE",
            Self::Private => "K_PRIVATE",
            Self::Property => "K_PROPERTY",
            Self::SchemaComponent => "K_SCHEMA_COMPONENT",
            Self::SchemaFacet => "K_SCHEMA_FACET",
            Self::SchemaParticle => "K_SCHEMA_PARTICLE",
            Self::SchemaRoot => "K_SCHEMA_ROOT",
            Self::SchemaType => "K_SCHEMA_TYPE",
            Self::SimpleType => "K_SIMPLE_TYPE",
            Self::Stylesheet => "K_STYLESHEET",
            Self::WhiteSpace => "WHITE_SPACE",
            Self::BadCharacter => "BAD_CHARACTER",
            Self::Eof => "NONE",
        }
    }

    /// Fixed source spelling for punctuation and keywords.
    ///
    /// Returns `None` for kinds whose text varies (literals, names, trivia,
    /// errors) and for [`Tag::Eof`].
    pub const fn lexeme(self) -> Option<&'static str> {
        let s = match self {
            Self::AnnotationIndicator => "%",
            Self::Star => "*",
            Self::ParenthesisOpen => "(",
            Self::ParenthesisClose => ")",
            Self::BlockOpen => "{",
            Self::BlockClose => "}",
            Self::SquareOpen => "[",
            Self::SquareClose => "]",
            Self::Comma => ",",
            Self::Separator => ";",
            Self::VariableIndicator => "$",
            Self::QNameSeparator => ":",
            Self::Equal => "=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Optional => "?",
            Self::Union => "|",
            Self::DirectDescendantsPath => "/",
            Self::AttributeSelector => "@",
            Self::ContextItem => ".",
            Self::Assign => ":=",
            Self::AxisSeparator => "::",
            Self::NotEqual => "!=",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
            Self::AllDescendantsPath => "//",
            Self::ParentSelector => "..",
            Self::ArrowFunction => "=>",
            Self::Ancestor => "ancestor",
            Self::AncestorOrSelf => "ancestor-or-self",
            Self::Array => "array",
            Self::ArrayNode => "array-node",
            Self::Attribute => "attribute",
            Self::AttributeDecl => "attribute-decl",
            Self::Binary => "binary",
            Self::Case => "case",
            Self::Catch => "catch",
            Self::Child => "child",
            Self::Declare => "declare",
            Self::Default => "default",
            Self::Descendant => "descendant",
            Self::DescendantOrSelf => "descendant-or-self",
            Self::Element => "element",
            Self::Encoding => "encoding",
            Self::Following => "following",
            Self::FollowingSibling => "following-sibling",
            Self::Function => "function",
            Self::Import => "import",
            Self::Lax => "lax",
            Self::Map => "map",
            Self::Module => "module",
            Self::Namespace => "namespace",
            Self::Node => "node",
            Self::ObjectNode => "object-node",
            Self::Parent => "parent",
            Self::Preceding => "preceding",
            Self::PrecedingSibling => "preceding-sibling",
            Self::Return => "return",
            Self::Schema => "schema",
            Self::SelfAxis => "self",
            Self::Strict => "strict",
            Self::Switch => "switch",
            Self::Text => "text",
            Self::Try => "try",
            Self::Type => "type",
            Self::Validate => "validate",
            Self::Variable => "variable",
            Self::Version => "version",
            Self::XQuery => "xquery",
            Self::As => "as",
            Self::BooleanNode => "boolean-node",
            Self::ComplexType => "complex-type",
            Self::ElementDecl => "element-decl",
            Self::NullNode => "null-node",
            Self::NumberNode => "number-node",
            Self::Private => "private",
            Self::Property => "property",
            Self::SchemaComponent => "schema-component",
            Self::SchemaFacet => "schema-facet",
            Self::SchemaParticle => "schema-particle",
            Self::SchemaRoot => "schema-root",
            Self::SchemaType => "schema-type",
            Self::SimpleType => "simple-type",
            Self::Stylesheet => "stylesheet",
            Self::IntegerLiteral
            | Self::DecimalLiteral
            | Self::DoubleLiteral
            | Self::StringLiteralStart
            | Self::StringLiteralContents
            | Self::StringLiteralEnd
            | Self::StringLiteralEscapedCharacter
            | Self::PredefinedEntityReference
            | Self::PartialEntityReference
            | Self::NCName
            | Self::WhiteSpace
            | Self::BadCharacter
            | Self::Eof => return None,
        };
        Some(s)
    }

    /// Look up the keyword spelled `text`.
    ///
    /// Keywords are case-sensitive. Returns `None` for anything else,
    /// including names that merely start with a keyword.
    pub fn keyword(text: &str) -> Option<Tag> {
        // Guard: all keywords are 2-18 chars and start with a lowercase letter
        if !(2..=18).contains(&text.len()) || !text.as_bytes()[0].is_ascii_lowercase() {
            return None;
        }
        let tag = match text {
            "ancestor" => Self::Ancestor,
            "ancestor-or-self" => Self::AncestorOrSelf,
            "array" => Self::Array,
            "array-node" => Self::ArrayNode,
            "attribute" => Self::Attribute,
            "attribute-decl" => Self::AttributeDecl,
            "binary" => Self::Binary,
            "case" => Self::Case,
            "catch" => Self::Catch,
            "child" => Self::Child,
            "declare" => Self::Declare,
            "default" => Self::Default,
            "descendant" => Self::Descendant,
            "descendant-or-self" => Self::DescendantOrSelf,
            "element" => Self::Element,
            "encoding" => Self::Encoding,
            "following" => Self::Following,
            "following-sibling" => Self::FollowingSibling,
            "function" => Self::Function,
            "import" => Self::Import,
            "lax" => Self::Lax,
            "map" => Self::Map,
            "module" => Self::Module,
            "namespace" => Self::Namespace,
            "node" => Self::Node,
            "object-node" => Self::ObjectNode,
            "parent" => Self::Parent,
            "preceding" => Self::Preceding,
            "preceding-sibling" => Self::PrecedingSibling,
            "return" => Self::Return,
            "schema" => Self::Schema,
            "self" => Self::SelfAxis,
            "strict" => Self::Strict,
            "switch" => Self::Switch,
            "text" => Self::Text,
            "try" => Self::Try,
            "type" => Self::Type,
            "validate" => Self::Validate,
            "variable" => Self::Variable,
            "version" => Self::Version,
            "xquery" => Self::XQuery,
            "as" => Self::As,
            "boolean-node" => Self::BooleanNode,
            "complex-type" => Self::ComplexType,
            "element-decl" => Self::ElementDecl,
            "null-node" => Self::NullNode,
            "number-node" => Self::NumberNode,
            "private" => Self::Private,
            "property" => Self::Property,
            "schema-component" => Self::SchemaComponent,
            "schema-facet" => Self::SchemaFacet,
            "schema-particle" => Self::SchemaParticle,
            "schema-root" => Self::SchemaRoot,
            "schema-type" => Self::SchemaType,
            "simple-type" => Self::SimpleType,
            "stylesheet" => Self::Stylesheet,
            _ => return None,
        };
        Some(tag)
    }

    /// Returns `true` for numeric and string literal parts and names.
    #[inline]
    pub const fn is_literal(self) -> bool {
        (self as u8) < 32
    }

    /// Returns `true` for fixed punctuation.
    #[inline]
    pub const fn is_punctuation(self) -> bool {
        matches!(self as u8, 32..=79)
    }

    /// Returns `true` for keywords.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self as u8, 96..=159)
    }

    /// Returns `true` for the forward and reverse axis keywords.
    pub const fn is_axis(self) -> bool {
        matches!(
            self,
            Self::Ancestor
                | Self::AncestorOrSelf
                | Self::Attribute
                | Self::Child
                | Self::Descendant
                | Self::DescendantOrSelf
                | Self::Following
                | Self::FollowingSibling
                | Self::Parent
                | Self::Preceding
                | Self::PrecedingSibling
                | Self::SelfAxis
        )
    }

    /// Returns `true` for tokens that carry no syntactic meaning.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::WhiteSpace)
    }

    /// Returns `true` for tokens that represent lexical errors.
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self as u8, 240..=254)
    }

    /// Returns `true` for the parts of a string literal, entity
    /// references included.
    pub const fn is_string_part(self) -> bool {
        matches!(
            self,
            Self::StringLiteralStart
                | Self::StringLiteralContents
                | Self::StringLiteralEnd
                | Self::StringLiteralEscapedCharacter
                | Self::PredefinedEntityReference
                | Self::PartialEntityReference
        )
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Size assertion: `Tag` is 1 byte.
const _: () = assert!(std::mem::size_of::<Tag>() == 1);
/// Size assertion: `Option<Tag>` uses the niche and stays 1 byte.
const _: () = assert!(std::mem::size_of::<Option<Tag>>() == 1);

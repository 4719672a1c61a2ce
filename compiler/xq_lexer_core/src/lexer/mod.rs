//! Pull-driven, restartable XQuery lexer.
//!
//! The lexer holds exactly one current token. [`Lexer::start`] scans the
//! first token of a region and [`Lexer::advance`] replaces it with the next
//! one, until the zero-width [`Tag::Eof`] marker is reached. Advancing past
//! the marker is a no-op.
//!
//! # Design
//!
//! Each scan flushes the cursor, enters the state chosen by the previous
//! token, and dispatches on the current code point. Every path consumes at
//! least one code point, so the stream is gap-free and always terminates.
//! Irregular input becomes [`Tag::BadCharacter`] or
//! [`Tag::PartialEntityReference`] tokens; nothing here returns an error.
//!
//! A numeric literal whose exponent marker has no digits is emitted without
//! the marker. The marker, and a sign following it, are then emitted as
//! single [`Tag::BadCharacter`] tokens from the dedicated
//! [`LexState::ExponentMarker`] and [`LexState::ExponentSign`] states, so a
//! rescan starting at either of them reproduces the same tokens.

use crate::cursor::Cursor;
use crate::{LexState, Tag, Token};

/// Restartable lexer over a single buffer.
///
/// A lexer is bound to one scan at a time. Use [`Lexer::start`] to rescan a
/// different region or buffer with the same instance.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    /// The current token.
    token: Token,
    /// State the next scan starts in.
    next_state: LexState,
    /// Set once the iterator has yielded the terminal marker.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over the whole of `source`, positioned at its first
    /// token.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer {
            cursor: Cursor::new(source),
            token: Token {
                tag: Tag::Eof,
                start: 0,
                end: 0,
                state: LexState::Default,
            },
            next_state: LexState::Default,
            finished: false,
        };
        lexer.scan_token();
        lexer
    }

    /// Reset the lexer to scan `buffer[start_offset..end_offset]` starting in
    /// `state`, and scan the first token.
    ///
    /// Resuming from a previously emitted `(token.start, token.state)` pair
    /// produces the same tokens a scan of the whole region would have
    /// produced from that point on.
    pub fn start(&mut self, buffer: &'a str, start_offset: u32, end_offset: u32, state: LexState) {
        self.cursor.start(buffer, start_offset, end_offset);
        self.next_state = state;
        self.finished = false;
        self.scan_token();
    }

    /// Move to the next token. No-op once the terminal marker is current.
    pub fn advance(&mut self) {
        if self.token.tag != Tag::Eof {
            self.scan_token();
        }
    }

    /// Kind of the current token, or `None` at the terminal marker.
    #[inline]
    pub fn token_type(&self) -> Option<Tag> {
        self.token.kind()
    }

    /// Kind of the current token, with [`Tag::Eof`] for the terminal marker.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.token.tag
    }

    /// Start offset of the current token.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token.start
    }

    /// End offset of the current token.
    #[inline]
    pub fn token_end(&self) -> u32 {
        self.token.end
    }

    /// State the current token was scanned in.
    #[inline]
    pub fn state(&self) -> LexState {
        self.token.state
    }

    /// Text of the current token.
    pub fn token_text(&self) -> &'a str {
        self.token.text(self.cursor.buffer())
    }

    /// End of the scan region.
    #[inline]
    pub fn buffer_end(&self) -> u32 {
        self.cursor.buffer_end()
    }

    /// The current token.
    #[inline]
    pub fn token(&self) -> Token {
        self.token
    }

    fn scan_token(&mut self) {
        self.cursor.flush();
        let state = self.next_state;
        let start = self.cursor.pos();
        let tag = if self.cursor.is_eof() {
            Tag::Eof
        } else {
            match state {
                LexState::Default => self.default_state(),
                LexState::DoubleQuoteString => self.string_state(b'"'),
                LexState::SingleQuoteString => self.string_state(b'\''),
                LexState::ExponentMarker => self.exponent_marker(),
                LexState::ExponentSign => {
                    self.cursor.advance();
                    self.next_state = LexState::Default;
                    Tag::BadCharacter
                }
            }
        };
        self.token = Token {
            tag,
            start,
            end: self.cursor.pos(),
            state,
        };
    }

    // === Default State ===

    fn default_state(&mut self) -> Tag {
        match self.cursor.current() {
            ' ' | '\t' | '\r' | '\n' => self.whitespace(),
            '0'..='9' => self.number(),
            '.' => self.dot(),
            '"' => self.string_start(LexState::DoubleQuoteString),
            '\'' => self.string_start(LexState::SingleQuoteString),
            c if is_name_start(c) => self.name(),
            c => self.punctuation(c),
        }
    }

    fn whitespace(&mut self) -> Tag {
        self.cursor
            .eat_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
        Tag::WhiteSpace
    }

    fn name(&mut self) -> Tag {
        self.cursor.eat_while(is_name_char);
        Tag::keyword(self.cursor.text()).unwrap_or(Tag::NCName)
    }

    fn string_start(&mut self, string_state: LexState) -> Tag {
        self.cursor.advance();
        self.next_state = string_state;
        Tag::StringLiteralStart
    }

    // === Numbers ===

    fn number(&mut self) -> Tag {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if self.cursor.current() == '.' {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            return self.exponent(Tag::DecimalLiteral);
        }
        self.exponent(Tag::IntegerLiteral)
    }

    /// `.` starts a decimal when a digit follows, otherwise it is `.` or `..`.
    fn dot(&mut self) -> Tag {
        self.cursor.advance();
        match self.cursor.current() {
            '0'..='9' => {
                self.cursor.eat_while(|c| c.is_ascii_digit());
                self.exponent(Tag::DecimalLiteral)
            }
            '.' => {
                self.cursor.advance();
                Tag::ParentSelector
            }
            _ => Tag::ContextItem,
        }
    }

    /// Extend a numeric literal with an exponent, if one with digits follows.
    ///
    /// On a dangling exponent the cursor backtracks to the marker and the
    /// next scan reports it from [`LexState::ExponentMarker`].
    fn exponent(&mut self, mantissa: Tag) -> Tag {
        if !matches!(self.cursor.current(), 'e' | 'E') {
            return mantissa;
        }
        self.cursor.save();
        self.cursor.advance();
        if matches!(self.cursor.current(), '+' | '-') {
            self.cursor.advance();
        }
        if self.cursor.current().is_ascii_digit() {
            self.cursor.eat_while(|c| c.is_ascii_digit());
            return Tag::DoubleLiteral;
        }
        self.cursor.restore();
        self.next_state = LexState::ExponentMarker;
        mantissa
    }

    fn exponent_marker(&mut self) -> Tag {
        self.cursor.advance();
        self.next_state = if matches!(self.cursor.current(), '+' | '-') {
            LexState::ExponentSign
        } else {
            LexState::Default
        };
        Tag::BadCharacter
    }

    // === Punctuation ===

    fn punctuation(&mut self, c: char) -> Tag {
        self.cursor.advance();
        match c {
            '%' => Tag::AnnotationIndicator,
            '*' => Tag::Star,
            '(' => Tag::ParenthesisOpen,
            ')' => Tag::ParenthesisClose,
            '{' => Tag::BlockOpen,
            '}' => Tag::BlockClose,
            '[' => Tag::SquareOpen,
            ']' => Tag::SquareClose,
            ',' => Tag::Comma,
            ';' => Tag::Separator,
            '$' => Tag::VariableIndicator,
            '+' => Tag::Plus,
            '-' => Tag::Minus,
            '?' => Tag::Optional,
            '|' => Tag::Union,
            '@' => Tag::AttributeSelector,
            ':' => match self.cursor.current() {
                '=' => self.two(Tag::Assign),
                ':' => self.two(Tag::AxisSeparator),
                _ => Tag::QNameSeparator,
            },
            '!' => self.followed_by('=', Tag::NotEqual, Tag::BadCharacter),
            '<' => self.followed_by('=', Tag::LessThanOrEqual, Tag::LessThan),
            '>' => self.followed_by('=', Tag::GreaterThanOrEqual, Tag::GreaterThan),
            '/' => self.followed_by('/', Tag::AllDescendantsPath, Tag::DirectDescendantsPath),
            '=' => self.followed_by('>', Tag::ArrowFunction, Tag::Equal),
            _ => Tag::BadCharacter,
        }
    }

    /// Consume the second character of a two-character token.
    #[inline]
    fn two(&mut self, tag: Tag) -> Tag {
        self.cursor.advance();
        tag
    }

    #[inline]
    fn followed_by(&mut self, next: char, long: Tag, short: Tag) -> Tag {
        if self.cursor.current() == next {
            self.two(long)
        } else {
            short
        }
    }

    // === Strings ===

    fn string_state(&mut self, quote: u8) -> Tag {
        let q = char::from(quote);
        match self.cursor.current() {
            c if c == q => {
                self.cursor.advance();
                if self.cursor.current() == q {
                    self.cursor.advance();
                    return Tag::StringLiteralEscapedCharacter;
                }
                self.next_state = LexState::Default;
                Tag::StringLiteralEnd
            }
            '&' => self.entity_reference(),
            _ => {
                self.cursor.skip_to_string_delim(quote);
                Tag::StringLiteralContents
            }
        }
    }

    /// `&` followed by a name and `;`. The name is not checked against the
    /// predefined entities.
    fn entity_reference(&mut self) -> Tag {
        self.cursor.advance();
        let name_start = self.cursor.pos();
        self.cursor.eat_while(|c| c.is_ascii_alphanumeric());
        if self.cursor.pos() > name_start && self.cursor.current() == ';' {
            self.cursor.advance();
            return Tag::PredefinedEntityReference;
        }
        Tag::PartialEntityReference
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields the current token and advances. The terminal marker is
    /// yielded exactly once.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.token;
        if token.tag == Tag::Eof {
            self.finished = true;
        } else {
            self.scan_token();
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Scan all of `source`, terminal marker included.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '.' | '_')
}

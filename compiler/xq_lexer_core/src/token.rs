use crate::{LexState, Tag};

/// A scanned token.
///
/// Offsets are byte offsets into the scanned buffer. `state` is the lexical
/// state the token was scanned in, not the state after it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub tag: Tag,
    pub start: u32,
    pub end: u32,
    pub state: LexState,
}

/// Size assertion: Token is 12 bytes (1 + 4 + 4 + 1, padded).
const _: () = assert!(std::mem::size_of::<Token>() == 12);

impl Token {
    /// Length of the token in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` for the zero-width terminal marker.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The token's text in `source`.
    ///
    /// Returns `""` when the token does not lie within `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or("")
    }

    /// The token kind, or `None` for the terminal marker.
    #[inline]
    pub const fn kind(&self) -> Option<Tag> {
        match self.tag {
            Tag::Eof => None,
            tag => Some(tag),
        }
    }
}

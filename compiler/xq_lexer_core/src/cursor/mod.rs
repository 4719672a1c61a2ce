//! Scan position over an immutable text buffer.
//!
//! The cursor tracks a pending match `start..end` inside the scan region
//! `0..buffer_end`. The lexer extends the match one code point at a time with
//! [`Cursor::advance`], inspects the next code point with [`Cursor::current`]
//! without consuming it, and commits a token boundary with [`Cursor::flush`].
//!
//! # End of Region
//!
//! [`Cursor::current`] returns the sentinel `'\0'` once `end == buffer_end`,
//! and [`Cursor::advance`] is a no-op there. A `'\0'` inside the region is an
//! ordinary character; use [`Cursor::is_eof`] to tell the two apart.
//!
//! # Backtracking
//!
//! [`Cursor::save`] and [`Cursor::restore`] give exactly one level of
//! backtracking. A second `save()` overwrites the first. Callers pair every
//! `restore()` with an earlier `save()` in the same token.

/// Scan position over an immutable text buffer.
///
/// Offsets are UTF-8 byte offsets into the buffer. [`Cursor::advance`] moves
/// by one code point, so `start` and `end` always fall on character
/// boundaries.
///
/// # Invariant
///
/// `start <= end <= buffer_end <= buffer.len()`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buffer: &'a str,
    /// Start of the pending match.
    start: u32,
    /// End of the pending match; the next code point is read from here.
    end: u32,
    /// Value of `end` captured by the most recent `save()`.
    saved: u32,
    /// End of the scan region.
    buffer_end: u32,
}

/// Size assertion: Cursor should be <= 32 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), 4 x u32 = 16 => 32 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a cursor over the whole of `buffer`.
    pub fn new(buffer: &'a str) -> Self {
        let mut cursor = Cursor {
            buffer,
            start: 0,
            end: 0,
            saved: 0,
            buffer_end: 0,
        };
        cursor.start(buffer, 0, clamp_len(buffer));
        cursor
    }

    /// Reset every field for a new scan of `buffer[start_offset..end_offset]`.
    ///
    /// # Contract
    ///
    /// `start_offset <= end_offset <= buffer.len()`, both on character
    /// boundaries. Out-of-range offsets are clamped to the buffer length.
    pub fn start(&mut self, buffer: &'a str, start_offset: u32, end_offset: u32) {
        let len = clamp_len(buffer);
        let buffer_end = end_offset.min(len);
        let start = start_offset.min(buffer_end);
        debug_assert!(
            buffer.is_char_boundary(start as usize) && buffer.is_char_boundary(buffer_end as usize),
            "scan region {start}..{buffer_end} does not fall on character boundaries"
        );
        self.buffer = buffer;
        self.start = start;
        self.end = start;
        self.saved = start;
        self.buffer_end = buffer_end;
    }

    /// Commit the pending match: the next token starts where this one ended.
    #[inline]
    pub fn flush(&mut self) {
        self.start = self.end;
    }

    /// Extend the pending match by one code point.
    ///
    /// No-op when the cursor is at the end of the scan region.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    pub fn advance(&mut self) {
        if self.end != self.buffer_end {
            self.end += self.current().len_utf8() as u32;
        }
    }

    /// Remember the current `end` for a later [`restore()`](Self::restore).
    #[inline]
    pub fn save(&mut self) {
        self.saved = self.end;
    }

    /// Reset `end` to the value captured by the most recent `save()`,
    /// discarding any `advance()` calls made since.
    #[inline]
    pub fn restore(&mut self) {
        self.end = self.saved;
    }

    /// Returns the code point at `end`, or `'\0'` at the end of the region.
    #[inline]
    pub fn current(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns `true` if the cursor has reached the end of the scan region.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.end == self.buffer_end
    }

    /// Start of the pending match.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.start
    }

    /// End of the pending match (the current read position).
    #[inline]
    pub fn pos(&self) -> u32 {
        self.end
    }

    /// End of the scan region.
    #[inline]
    pub fn buffer_end(&self) -> u32 {
        self.buffer_end
    }

    /// The buffer being scanned.
    #[inline]
    pub fn buffer(&self) -> &'a str {
        self.buffer
    }

    /// Text of the pending match.
    pub fn text(&self) -> &'a str {
        &self.buffer[self.start as usize..self.end as usize]
    }

    /// Advance while `pred` returns `true` for the current code point.
    ///
    /// # Contract
    ///
    /// `pred('\0')` must return `false`, otherwise the loop only stops at the
    /// end of the region.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance past ordinary string content to the next `quote` or `&`.
    ///
    /// Returns the delimiter found, or `'\0'` when the region ends first.
    /// Both delimiters are ASCII, so a byte search never stops inside a
    /// multi-byte character.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < buffer_end - end, which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self, quote: u8) -> char {
        let remaining = self.remaining().as_bytes();
        if let Some(offset) = memchr::memchr2(quote, b'&', remaining) {
            self.end += offset as u32;
            char::from(remaining[offset])
        } else {
            self.end = self.buffer_end;
            '\0'
        }
    }

    fn remaining(&self) -> &'a str {
        &self.buffer[self.end as usize..self.buffer_end as usize]
    }
}

/// Buffer length as `u32`, saturating for buffers larger than 4 GiB.
fn clamp_len(buffer: &str) -> u32 {
    u32::try_from(buffer.len()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;

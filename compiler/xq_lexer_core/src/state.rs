//! Lexical state carried between tokens.

/// The entire context the lexer needs to resume scanning at a token boundary.
///
/// Every [`Token`](crate::Token) records the state it was scanned in, so a
/// rescan may start from any `(token.start, token.state)` pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LexState {
    /// Outside any literal.
    #[default]
    Default = 0,
    /// Inside content of a `"`-delimited string.
    DoubleQuoteString = 1,
    /// Inside content of a `'`-delimited string.
    SingleQuoteString = 2,
    /// The next code point is an exponent marker left over from a numeric
    /// literal without exponent digits.
    ExponentMarker = 3,
    /// The next code point is the sign that followed a dangling exponent
    /// marker.
    ExponentSign = 4,
}

impl LexState {
    /// All states, in discriminant order.
    pub const ALL: [LexState; 5] = [
        LexState::Default,
        LexState::DoubleQuoteString,
        LexState::SingleQuoteString,
        LexState::ExponentMarker,
        LexState::ExponentSign,
    ];

    /// Decode a persisted state value.
    pub const fn from_u8(value: u8) -> Option<LexState> {
        match value {
            0 => Some(Self::Default),
            1 => Some(Self::DoubleQuoteString),
            2 => Some(Self::SingleQuoteString),
            3 => Some(Self::ExponentMarker),
            4 => Some(Self::ExponentSign),
            _ => None,
        }
    }

    /// The persisted form of this state.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// The quote delimiting the open string, if the state is inside one.
    pub const fn quote(self) -> Option<u8> {
        match self {
            Self::DoubleQuoteString => Some(b'"'),
            Self::SingleQuoteString => Some(b'\''),
            Self::Default | Self::ExponentMarker | Self::ExponentSign => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_values_round_trip() {
        for state in LexState::ALL {
            assert_eq!(LexState::from_u8(state.as_u8()), Some(state));
        }
        assert_eq!(LexState::from_u8(5), None);
    }

    #[test]
    fn string_states_know_their_quote() {
        assert_eq!(LexState::DoubleQuoteString.quote(), Some(b'"'));
        assert_eq!(LexState::SingleQuoteString.quote(), Some(b'\''));
        assert_eq!(LexState::Default.quote(), None);
        assert_eq!(LexState::default(), LexState::Default);
    }
}

//! Restartable lexical scanner for XQuery and its vendor dialects.
//!
//! The scanner is built from three layers:
//!
//! - [`Cursor`]: a scan position over an immutable buffer with a pending
//!   match range and one saved mark for backtracking.
//! - [`Tag`]: the closed registry of token kinds the lexer may emit.
//! - [`Lexer`]: a pull-driven state machine whose entire carry-over context
//!   is a [`LexState`], recorded on every [`Token`] so that scanning can be
//!   resumed from any token boundary.
//!
//! The lexer never fails. Every byte of the input belongs to exactly one
//! token, with [`Tag::BadCharacter`] as the catch-all, and the stream ends
//! with a single zero-width [`Tag::Eof`] marker.

mod cursor;
mod lexer;
mod state;
mod tag;
mod token;

pub use cursor::Cursor;
pub use lexer::{tokenize, Lexer};
pub use state::LexState;
pub use tag::Tag;
pub use token::Token;

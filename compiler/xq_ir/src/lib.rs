//! Shared source-location types for the XQuery front end.
//!
//! Kept separate from the lexer core so diagnostics and conformance anchors
//! can name source ranges without depending on the scanner.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;

pub use span::Span;

//! Diagnostic system for XQuery static errors.
//!
//! - Error codes from the W3C error namespace, for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (context for the fix)
//!
//! Analysis never fails by returning these: a [`Diagnostic`] is a value the
//! host reports, collects, or drops.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;

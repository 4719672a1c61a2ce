//! Dialect conformance for version-sensitive XQuery constructs.
//!
//! A [`ConformanceRule`] lists the alternative [`Requirement`]s under which
//! a construct is legal; the construct conforms to a
//! [`Target`](xq_dialect::Target) if any alternative is met. Each
//! [`ConstructKind`] carries its rule as static data and [`check`] is the
//! single evaluation function shared by all of them.
//!
//! The engine does not fail and does not read settings. Non-conformance is
//! reported as a [`Conformance`] value, anchored at the token a diagnostic
//! should point to.

mod construct;
mod rule;
mod scan;

pub use construct::{check, Conformance, Construct, ConstructKind};
pub use rule::{ConformanceRule, Requirement};
pub use scan::{check_module, check_version_decl, find_constructs, version_decl, VersionDecl};

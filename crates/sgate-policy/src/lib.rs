//! # sgate-policy — Policy Set Engine
//!
//! Maintains the per-institution allow/deny policy set for named
//! applications. Three operations:
//!
//! - [`bootstrap()`] — materialize the fixed default template for a newly
//!   created institution. Deliberately not idempotent: calling twice
//!   produces duplicate entries, and deduplication is the caller's concern.
//! - [`list()`] — all entries for an institution; unknown institutions
//!   yield an empty list rather than an error.
//! - [`update()`] — best-effort bulk update of allow flags by exact,
//!   case-sensitive application name. Unknown names are skipped silently;
//!   a malformed batch is rejected before any mutation.
//!
//! The engine holds no state. Every operation takes the registry capability
//! explicitly and is a pure function of its inputs plus what the registry
//! returns.

pub mod ops;

pub use ops::{bootstrap, list, update, PolicyError, PolicyUpdate};

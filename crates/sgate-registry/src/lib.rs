//! # sgate-registry — Storage Capability
//!
//! The engine crates contain no storage mechanics of their own: every
//! operation is a pure function of its inputs plus whatever the registry
//! returns for that call. This crate defines the [`Registry`] trait — the
//! capability handed explicitly into engine operations — and an in-memory
//! implementation backed by `DashMap`.
//!
//! ## Design
//!
//! - The trait is synchronous and object-safe. Callers hold an
//!   `Arc<dyn Registry>` and pass `&dyn Registry` down; there is no
//!   process-wide database handle.
//! - Uniqueness guarantees live here, not in the engines. In particular,
//!   hardware device identifiers are unique across all students, and a
//!   duplicate registration fails with
//!   [`RegistryError::DuplicateHardwareDevice`] before any row is written.
//! - Storage failures surface as [`RegistryError`] values and are
//!   propagated verbatim by the engines, with no retries and no
//!   interpretation.

pub mod memory;
pub mod registry;

pub use memory::MemoryRegistry;
pub use registry::{Registry, RegistryError};

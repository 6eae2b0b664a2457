//! # sgate-core — Foundational Types for the SchoolsGate Stack
//!
//! This crate is the bedrock of the SchoolsGate Stack. It defines the
//! type-system primitives shared by every other crate in the workspace:
//! identifier newtypes, validated geographic coordinates, canonical byte
//! production for credential tokens, UTC-only timestamps, and the
//! institution / student / policy data model.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `InstitutionId`,
//!    `StudentId`, `PolicyEntryId`, `HardwareId` — you cannot pass a student
//!    identifier where an institution identifier is expected. No bare
//!    strings or bare UUIDs for identifiers.
//!
//! 2. **Validated constructors.** `GeoPoint::new()` rejects non-finite and
//!    out-of-range coordinates; `Institution::new()` rejects empty names.
//!    A value that exists is a value that passed validation.
//!
//! 3. **`CanonicalBytes` newtype.** Credential token production flows
//!    through `CanonicalBytes::new()` exclusively — sorted keys, compact
//!    separators, deterministic byte sequence. Two encodings of the same
//!    payload are byte-identical by construction.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision for all record creation times.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sgate-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod canonical;
pub mod error;
pub mod geo;
pub mod identity;
pub mod institution;
pub mod policy;
pub mod student;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use error::CoreError;
pub use geo::GeoPoint;
pub use identity::{CredentialToken, HardwareId, InstitutionId, PolicyEntryId, StudentId};
pub use institution::Institution;
pub use policy::{PolicyEntry, TemplateEntry, DEFAULT_POLICY_TEMPLATE};
pub use student::Student;
pub use temporal::Timestamp;

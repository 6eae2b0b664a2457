//! # sgate-credential — Credential Encoding
//!
//! Turns a credential payload (institution, student, optional hardware
//! device) into an opaque, printable token. The token is what device
//! tooling renders as a QR code and staff tooling scans back.
//!
//! ## Invariant
//!
//! Encoding is one-way and deterministic: the same payload always yields a
//! byte-identical token, so the scanned value can be compared against the
//! one the registry stored at registration time. There is no decode
//! operation — the registry is the source of truth for identity, and the
//! token is a presentation artifact only.
//!
//! The encoder stores nothing and caches nothing; callers persist the
//! result themselves.

pub mod encode;
pub mod payload;

pub use encode::{encode, CredentialError, TOKEN_PREFIX};
pub use payload::CredentialPayload;

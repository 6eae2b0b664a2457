//! # sgate-presence — Presence Verification
//!
//! Decides whether a registered device is currently on an institution's
//! premises, from two signals checked in a fixed order: coordinate
//! proximity to the institution's anchor location, then trusted-network
//! match. First match wins; the signals are never averaged or combined.
//!
//! The caller resolves the institution before invoking the verifier — a
//! dangling institution identifier is a not-found error at the facade, not
//! a false-presence result here.
//!
//! The verifier holds no state and performs no I/O: one call is one
//! non-suspending computation over the institution record and the claim.

pub mod verifier;

pub use verifier::{verify, PresenceClaim, PresenceDecision, PROXIMITY_WINDOW_DEGREES};

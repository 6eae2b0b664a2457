//! # Registry Trait
//!
//! The abstract storage interface the engine crates operate through. An
//! implementation owns durable storage of institution, student, and policy
//! records; the engines only read values from it and hand mutations back.
//!
//! ## Invariant
//!
//! The `Send + Sync` bounds allow one registry to serve many simultaneous
//! request-scoped callers. Implementations provide their own uniqueness and
//! transaction guarantees — preventing two concurrent bootstrap calls from
//! double-inserting policy rows is a registry concern, not an engine one.

use thiserror::Error;

use sgate_core::{
    CredentialToken, HardwareId, Institution, InstitutionId, PolicyEntry, PolicyEntryId, Student,
    StudentId,
};

/// Errors surfaced by registry implementations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A student registration reused an already-registered hardware device
    /// identifier. Surfaced unmodified to the registration caller.
    #[error("duplicate hardware device: {0}")]
    DuplicateHardwareDevice(HardwareId),

    /// A credential was already attached to this student. Credentials are
    /// issued once at registration and never regenerated implicitly.
    #[error("credential already issued for {0}")]
    CredentialAlreadyIssued(StudentId),

    /// The referenced student does not exist.
    #[error("unknown student: {0}")]
    UnknownStudent(StudentId),

    /// The referenced policy entry does not exist.
    #[error("unknown policy entry: {0}")]
    UnknownPolicyEntry(PolicyEntryId),

    /// Opaque infrastructure failure. Propagated verbatim, never retried
    /// by the engines.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Abstract storage of institution, student, and policy records.
pub trait Registry: Send + Sync {
    /// Persist a newly created institution.
    fn insert_institution(&self, institution: Institution) -> Result<(), RegistryError>;

    /// Look up an institution by identifier.
    fn institution(&self, id: InstitutionId) -> Result<Option<Institution>, RegistryError>;

    /// Persist a newly registered student, enforcing hardware-id uniqueness.
    fn insert_student(&self, student: Student) -> Result<(), RegistryError>;

    /// Look up a student by identifier.
    fn student(&self, id: StudentId) -> Result<Option<Student>, RegistryError>;

    /// Attach the issued credential token to a student record. Rejected if
    /// a credential is already present.
    fn attach_credential(
        &self,
        id: StudentId,
        token: CredentialToken,
    ) -> Result<(), RegistryError>;

    /// Persist a batch of newly created policy entries. Performs no
    /// deduplication — bootstrap idempotency is the caller's concern.
    fn insert_policies(&self, entries: &[PolicyEntry]) -> Result<(), RegistryError>;

    /// All policy entries for an institution, insertion order preserved.
    /// Unknown institutions yield an empty list.
    fn policies(&self, institution: InstitutionId) -> Result<Vec<PolicyEntry>, RegistryError>;

    /// Persist an updated policy entry (allow flag changes only).
    fn save_policy(&self, entry: &PolicyEntry) -> Result<(), RegistryError>;
}

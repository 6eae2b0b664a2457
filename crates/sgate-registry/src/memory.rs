//! # In-Memory Registry
//!
//! `DashMap`-backed [`Registry`] implementation. Each record type gets its
//! own map; a secondary index enforces hardware-id uniqueness. Cheaply
//! cloneable via `Arc` — all clones share the same data.
//!
//! This is the implementation the service facade and the test suites run
//! against. State does not survive restarts.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use sgate_core::{
    CredentialToken, HardwareId, Institution, InstitutionId, PolicyEntry, Student, StudentId,
};

use crate::registry::{Registry, RegistryError};

/// Inner storage holding all tables.
struct Inner {
    institutions: DashMap<InstitutionId, Institution>,
    students: DashMap<StudentId, Student>,
    /// Secondary index: hardware device id → owning student. The entry API
    /// makes the uniqueness check and the reservation a single atomic step.
    hardware_index: DashMap<HardwareId, StudentId>,
    /// Policy entries per institution, insertion order preserved.
    policies: DashMap<InstitutionId, Vec<PolicyEntry>>,
}

/// Shared in-memory registry.
#[derive(Clone)]
pub struct MemoryRegistry {
    inner: Arc<Inner>,
}

impl MemoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                institutions: DashMap::new(),
                students: DashMap::new(),
                hardware_index: DashMap::new(),
                policies: DashMap::new(),
            }),
        }
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry for MemoryRegistry {
    fn insert_institution(&self, institution: Institution) -> Result<(), RegistryError> {
        match self.inner.institutions.entry(institution.id) {
            Entry::Occupied(_) => Err(RegistryError::Storage(format!(
                "{} already exists",
                institution.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(institution);
                Ok(())
            }
        }
    }

    fn institution(&self, id: InstitutionId) -> Result<Option<Institution>, RegistryError> {
        Ok(self.inner.institutions.get(&id).map(|r| r.clone()))
    }

    fn insert_student(&self, student: Student) -> Result<(), RegistryError> {
        if self.inner.students.contains_key(&student.id) {
            return Err(RegistryError::Storage(format!(
                "{} already exists",
                student.id
            )));
        }
        if let Some(hardware_id) = student.hardware_id.clone() {
            match self.inner.hardware_index.entry(hardware_id) {
                Entry::Occupied(taken) => {
                    return Err(RegistryError::DuplicateHardwareDevice(taken.key().clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(student.id);
                }
            }
        }
        self.inner.students.insert(student.id, student);
        Ok(())
    }

    fn student(&self, id: StudentId) -> Result<Option<Student>, RegistryError> {
        Ok(self.inner.students.get(&id).map(|r| r.clone()))
    }

    fn attach_credential(
        &self,
        id: StudentId,
        token: CredentialToken,
    ) -> Result<(), RegistryError> {
        let mut student = self
            .inner
            .students
            .get_mut(&id)
            .ok_or(RegistryError::UnknownStudent(id))?;
        if student.credential.is_some() {
            return Err(RegistryError::CredentialAlreadyIssued(id));
        }
        student.credential = Some(token);
        Ok(())
    }

    fn insert_policies(&self, entries: &[PolicyEntry]) -> Result<(), RegistryError> {
        for entry in entries {
            self.inner
                .policies
                .entry(entry.institution_id)
                .or_default()
                .push(entry.clone());
        }
        Ok(())
    }

    fn policies(&self, institution: InstitutionId) -> Result<Vec<PolicyEntry>, RegistryError> {
        Ok(self
            .inner
            .policies
            .get(&institution)
            .map(|rows| rows.clone())
            .unwrap_or_default())
    }

    fn save_policy(&self, entry: &PolicyEntry) -> Result<(), RegistryError> {
        let mut rows = self
            .inner
            .policies
            .get_mut(&entry.institution_id)
            .ok_or(RegistryError::UnknownPolicyEntry(entry.id))?;
        let slot = rows
            .iter_mut()
            .find(|row| row.id == entry.id)
            .ok_or(RegistryError::UnknownPolicyEntry(entry.id))?;
        *slot = entry.clone();
        Ok(())
    }
}

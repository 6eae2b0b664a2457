//! # Policy Operations
//!
//! Bootstrap, list, and bulk-update over a [`Registry`] capability.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sgate_core::{InstitutionId, PolicyEntry, DEFAULT_POLICY_TEMPLATE};
use sgate_registry::{Registry, RegistryError};

/// One tuple of a bulk update batch: set the allow flag of the entry whose
/// application name matches exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyUpdate {
    /// Application name, matched case-sensitively against existing entries.
    pub app_name: String,
    /// The new allow flag.
    pub allowed: bool,
}

/// Errors from policy operations.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The referenced institution does not resolve.
    #[error("institution not found: {0}")]
    InstitutionNotFound(InstitutionId),

    /// The update batch is malformed. Rejected before any mutation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Registry failure, propagated verbatim.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Materialize the default policy template for an institution and persist
/// the resulting entries.
///
/// Produces exactly the template's app/package/allow triples, in template
/// order. No deduplication: a second call inserts a second copy of every
/// entry. The institution must resolve — bootstrap is invoked right after
/// institution creation, and a dangling identifier here means the caller
/// skipped that step.
///
/// # Errors
///
/// [`PolicyError::InstitutionNotFound`] if the institution does not
/// resolve; registry failures propagate.
pub fn bootstrap(
    registry: &dyn Registry,
    institution: InstitutionId,
) -> Result<Vec<PolicyEntry>, PolicyError> {
    if registry.institution(institution)?.is_none() {
        return Err(PolicyError::InstitutionNotFound(institution));
    }
    let entries: Vec<PolicyEntry> = DEFAULT_POLICY_TEMPLATE
        .iter()
        .map(|template| PolicyEntry::from_template(institution, template))
        .collect();
    registry.insert_policies(&entries)?;
    tracing::debug!(%institution, count = entries.len(), "bootstrapped default policies");
    Ok(entries)
}

/// All policy entries for an institution.
///
/// Unknown institutions yield an empty list — the policy surface mirrors
/// the registry's view without resolving tenancy itself.
pub fn list(
    registry: &dyn Registry,
    institution: InstitutionId,
) -> Result<Vec<PolicyEntry>, PolicyError> {
    Ok(registry.policies(institution)?)
}

/// Apply a best-effort bulk update of allow flags, returning how many
/// entries were updated.
///
/// For each tuple: the first entry with an exactly matching application
/// name gets its allow flag set; tuples naming no existing entry are
/// skipped silently; that is defined success, not a failure.
///
/// # Errors
///
/// [`PolicyError::InvalidInput`] if any tuple carries an empty application
/// name. The batch is validated up front, so a malformed batch mutates
/// nothing. Registry failures propagate.
pub fn update(
    registry: &dyn Registry,
    institution: InstitutionId,
    updates: &[PolicyUpdate],
) -> Result<usize, PolicyError> {
    for tuple in updates {
        if tuple.app_name.trim().is_empty() {
            return Err(PolicyError::InvalidInput(
                "update entry is missing an application name".to_string(),
            ));
        }
    }

    let mut entries = registry.policies(institution)?;
    let mut updated = 0usize;
    for tuple in updates {
        match entries
            .iter_mut()
            .find(|entry| entry.app_name == tuple.app_name)
        {
            Some(entry) => {
                entry.allowed = tuple.allowed;
                registry.save_policy(entry)?;
                updated += 1;
            }
            None => {
                tracing::debug!(
                    %institution,
                    app_name = %tuple.app_name,
                    "no matching policy entry, skipping"
                );
            }
        }
    }
    Ok(updated)
}

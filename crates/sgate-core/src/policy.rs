//! # Policy Entries and the Default Template
//!
//! A `PolicyEntry` is an allow/deny decision for one named application
//! within one institution. The default template below is the single source
//! of truth for the entries every newly created institution receives — the
//! policy engine materializes it verbatim, in order.
//!
//! ## Invariant
//!
//! Application name and package name are immutable once created; only the
//! allow flag may change. App names are unique per institution by
//! convention — when duplicates exist anyway, updates touch the first match
//! and leave the rest alone.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::identity::{InstitutionId, PolicyEntryId};
use crate::temporal::Timestamp;

/// One row of the default policy template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Application display name, matched exactly on update.
    pub app_name: &'static str,
    /// Package/bundle identifier. Free-form, not validated.
    pub package_name: &'static str,
    /// Whether the application is allowed while on premises.
    pub allowed: bool,
}

/// The fixed bootstrap template applied to every newly created institution.
///
/// Order matters: consumers may store entries unordered, but bootstrap
/// must produce exactly these app/package/allow triples in this sequence.
pub const DEFAULT_POLICY_TEMPLATE: [TemplateEntry; 7] = [
    TemplateEntry {
        app_name: "Google Classroom",
        package_name: "com.google.android.apps.classroom",
        allowed: true,
    },
    TemplateEntry {
        app_name: "Notes",
        package_name: "com.google.android.keep",
        allowed: true,
    },
    TemplateEntry {
        app_name: "Calculator",
        package_name: "com.android.calculator2",
        allowed: true,
    },
    TemplateEntry {
        app_name: "WhatsApp",
        package_name: "com.whatsapp",
        allowed: false,
    },
    TemplateEntry {
        app_name: "Instagram",
        package_name: "com.instagram.android",
        allowed: false,
    },
    TemplateEntry {
        app_name: "YouTube",
        package_name: "com.google.android.youtube",
        allowed: false,
    },
    TemplateEntry {
        app_name: "Games",
        package_name: "com.android.games",
        allowed: false,
    },
];

/// An allow/deny decision for one named application within one institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyEntry {
    /// Unique row identifier.
    pub id: PolicyEntryId,
    /// Owning institution.
    pub institution_id: InstitutionId,
    /// Application display name. Immutable once created.
    pub app_name: String,
    /// Package/bundle identifier. Free-form, immutable once created.
    pub package_name: Option<String>,
    /// Whether the application is allowed. The only mutable field.
    pub allowed: bool,
    /// Creation time.
    pub created_at: Timestamp,
}

impl PolicyEntry {
    /// Create a policy entry with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if the application name is empty
    /// or whitespace-only.
    pub fn new(
        institution_id: InstitutionId,
        app_name: impl Into<String>,
        package_name: Option<String>,
        allowed: bool,
    ) -> Result<Self, CoreError> {
        let app_name = app_name.into();
        if app_name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "application name must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            id: PolicyEntryId::new(),
            institution_id,
            app_name,
            package_name,
            allowed,
            created_at: Timestamp::now(),
        })
    }

    /// Materialize a template row for an institution.
    pub fn from_template(institution_id: InstitutionId, template: &TemplateEntry) -> Self {
        Self {
            id: PolicyEntryId::new(),
            institution_id,
            app_name: template.app_name.to_string(),
            package_name: Some(template.package_name.to_string()),
            allowed: template.allowed,
            created_at: Timestamp::now(),
        }
    }
}

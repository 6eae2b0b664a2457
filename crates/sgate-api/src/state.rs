//! # Application State
//!
//! Shared state for the Axum application: the registry capability handed
//! to every engine operation. There is no process-wide singleton; tests
//! construct as many independent states as they need.

use std::sync::Arc;

use sgate_registry::{MemoryRegistry, Registry};

/// Shared application state passed to all route handlers.
///
/// Cheaply cloneable; all clones share the same registry.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<dyn Registry>,
}

impl AppState {
    /// State backed by a fresh in-memory registry.
    pub fn new() -> Self {
        Self::with_registry(Arc::new(MemoryRegistry::new()))
    }

    /// State backed by a caller-supplied registry implementation.
    pub fn with_registry(registry: Arc<dyn Registry>) -> Self {
        Self { registry }
    }

    /// Borrow the registry capability for one operation.
    pub fn registry(&self) -> &dyn Registry {
        self.registry.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

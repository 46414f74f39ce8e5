//! Entry point: resolve a design reference to its document bytes.
//!
//! `resolve` is a single synchronous pass: parse the reference, look up the
//! handler for its scheme, invoke it. No caching, no retries, no partial
//! results. The resolver is immutable after construction and safe to share
//! across threads; each call blocks for the duration of its own I/O.

use std::sync::Arc;

use crate::error::ResolveError;
use crate::handlers;
use crate::reference::ParsedReference;
use crate::registry::SchemeRegistry;
use crate::session::SessionProvider;

/// Resolves design references against the fixed scheme table.
pub struct Resolver {
    registry: SchemeRegistry,
    sessions: Arc<dyn SessionProvider>,
}

impl Resolver {
    /// Builds a resolver. `sessions` backs the authenticated-service
    /// handler; the other handlers never touch it.
    pub fn new(sessions: Arc<dyn SessionProvider>) -> Self {
        Resolver {
            registry: SchemeRegistry::new(),
            sessions,
        }
    }

    /// Resolves `design_ref` to the raw bytes of the referenced document.
    pub fn resolve(&self, design_ref: &str) -> Result<Vec<u8>, ResolveError> {
        let reference = ParsedReference::parse(design_ref)?;

        let kind = self
            .registry
            .handler_for(reference.scheme())
            .ok_or_else(|| {
                ResolveError::invalid(format!(
                    "invalid reference scheme {}: no handler",
                    reference.scheme()
                ))
            })?;

        handlers::fetch(kind, &reference, self.sessions.as_ref())
    }

    /// The scheme table this resolver dispatches on.
    pub fn registry(&self) -> &SchemeRegistry {
        &self.registry
    }
}

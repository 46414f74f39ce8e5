//! Fetch strategies, one per [`HandlerKind`].
//!
//! Each handler takes a parsed reference and produces the document bytes or
//! a [`ResolveError`]. Handlers hold no per-call state; the authenticated
//! variant borrows the process-wide session provider.

mod file;
mod http;
mod service;

use crate::error::ResolveError;
use crate::reference::ParsedReference;
use crate::registry::HandlerKind;
use crate::session::SessionProvider;

/// Dispatches a parsed reference to the handler registered for its scheme.
pub(crate) fn fetch(
    kind: HandlerKind,
    reference: &ParsedReference,
    sessions: &dyn SessionProvider,
) -> Result<Vec<u8>, ResolveError> {
    match kind {
        HandlerKind::LocalFile => file::fetch(reference),
        HandlerKind::PlainRemote => http::fetch(reference),
        HandlerKind::AuthenticatedRemote => service::fetch(reference, sessions),
    }
}

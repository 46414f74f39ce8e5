//! Scheme handler registry.
//!
//! A fixed mapping from URI scheme to fetch strategy, built once at startup
//! and read-only afterward. Lookups are exact case-sensitive string matches;
//! there is no runtime registration API.

use std::collections::HashMap;

/// The fetch strategies a scheme can map to. Dispatch is an exhaustive
/// `match` over this enum, so adding a strategy forces every call site to
/// handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// `file://` local filesystem read.
    LocalFile,
    /// `http://` / `https://`, optionally with Basic auth from the URL.
    PlainRemote,
    /// `<tag>+http(s)://` control-plane service behind an identity session.
    AuthenticatedRemote,
}

/// Immutable scheme table.
#[derive(Debug)]
pub struct SchemeRegistry {
    table: HashMap<&'static str, HandlerKind>,
}

impl SchemeRegistry {
    /// Builds the fixed scheme table.
    pub fn new() -> Self {
        let table = HashMap::from([
            ("file", HandlerKind::LocalFile),
            ("http", HandlerKind::PlainRemote),
            ("https", HandlerKind::PlainRemote),
            ("deckhand+http", HandlerKind::AuthenticatedRemote),
            ("deckhand+https", HandlerKind::AuthenticatedRemote),
            ("promenade+http", HandlerKind::AuthenticatedRemote),
            ("promenade+https", HandlerKind::AuthenticatedRemote),
        ]);
        SchemeRegistry { table }
    }

    /// Returns the handler kind registered for `scheme`, if any.
    pub fn handler_for(&self, scheme: &str) -> Option<HandlerKind> {
        self.table.get(scheme).copied()
    }

    /// All registered schemes, sorted for stable display.
    pub fn schemes(&self) -> Vec<&'static str> {
        let mut schemes: Vec<_> = self.table.keys().copied().collect();
        schemes.sort_unstable();
        schemes
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

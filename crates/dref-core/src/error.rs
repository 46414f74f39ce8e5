//! Resolution error type.

use thiserror::Error;

/// Failure of a single reference resolution.
///
/// Every failure path lands in this one enum so callers match on a single
/// type instead of fishing raw I/O and transport errors out of a catch-all.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The reference itself is unusable: unparsable URI, unregistered
    /// scheme, a `file://` reference with no path, or an authenticated
    /// service answered with status >= 400.
    #[error("invalid design reference: {0}")]
    InvalidReference(String),

    /// Local filesystem failure while reading a `file://` reference.
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Transport-level HTTP failure (connect, timeout, TLS).
    #[error("fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The identity session provider could not supply a session, or the
    /// session GET itself failed below the HTTP layer.
    #[error("identity session: {0:#}")]
    Session(#[source] anyhow::Error),
}

impl ResolveError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ResolveError::InvalidReference(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_reference_display_carries_message() {
        let err = ResolveError::invalid("invalid reference scheme ftp: no handler");
        let msg = err.to_string();
        assert!(msg.contains("invalid design reference"));
        assert!(msg.contains("ftp"));
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;
        let err = ResolveError::Io {
            path: "/tmp/missing".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("/tmp/missing"));
        assert!(err.source().is_some());
    }
}

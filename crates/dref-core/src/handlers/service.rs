//! Authenticated control-plane fetch for compound-scheme references.
//!
//! `<tag>+http(s)://` references target internal services reachable only
//! through an identity-backed session. The `<tag>+` prefix is stripped to
//! recover the transport scheme before the GET. Unlike the plain-remote
//! handler, status is interpreted here: these services are trusted to speak
//! HTTP correctly, so >= 400 means the reference is bad.

use crate::error::ResolveError;
use crate::reference::ParsedReference;
use crate::session::SessionProvider;

pub(super) fn fetch(
    reference: &ParsedReference,
    sessions: &dyn SessionProvider,
) -> Result<Vec<u8>, ResolveError> {
    let url = reference.transport_url();
    tracing::debug!(%url, "calling identity session for url");

    let session = sessions.get_session().map_err(ResolveError::Session)?;
    let response = session.get(&url).map_err(ResolveError::Session)?;

    if response.status >= 400 {
        return Err(ResolveError::invalid(format!(
            "received error code for reference {}: {} - {}",
            url,
            response.status,
            response.text()
        )));
    }

    Ok(response.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ServiceResponse, Session};
    use std::sync::Mutex;

    /// Provider whose sessions return a canned response and record the URLs
    /// they are asked for.
    struct FakeProvider {
        response: ServiceResponse,
        requested: Mutex<Vec<String>>,
    }

    impl FakeProvider {
        fn replying(status: u32, body: &[u8]) -> Self {
            FakeProvider {
                response: ServiceResponse {
                    status,
                    body: body.to_vec(),
                },
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    struct FakeSession<'a> {
        provider: &'a FakeProvider,
    }

    impl Session for FakeSession<'_> {
        fn get(&self, url: &str) -> anyhow::Result<ServiceResponse> {
            self.provider.requested.lock().unwrap().push(url.to_string());
            Ok(self.provider.response.clone())
        }
    }

    impl SessionProvider for FakeProvider {
        fn get_session(&self) -> anyhow::Result<Box<dyn Session + '_>> {
            Ok(Box::new(FakeSession { provider: self }))
        }
    }

    /// Provider that cannot supply a session at all.
    struct BrokenProvider;

    impl SessionProvider for BrokenProvider {
        fn get_session(&self) -> anyhow::Result<Box<dyn Session + '_>> {
            anyhow::bail!("identity backend unreachable")
        }
    }

    #[test]
    fn success_returns_raw_body_via_rewritten_url() {
        let provider = FakeProvider::replying(200, b"site: design");
        let r = ParsedReference::parse("deckhand+http://host/doc").unwrap();

        let bytes = fetch(&r, &provider).unwrap();
        assert_eq!(bytes, b"site: design");
        assert_eq!(
            provider.requested.lock().unwrap().as_slice(),
            ["http://host/doc"]
        );
    }

    #[test]
    fn error_status_becomes_invalid_reference() {
        let provider = FakeProvider::replying(404, b"revision not found");
        let r = ParsedReference::parse("deckhand+http://host/doc").unwrap();

        let err = fetch(&r, &provider).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidReference(_)));
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("revision not found"));
        assert!(msg.contains("http://host/doc"));
    }

    #[test]
    fn status_below_400_is_success() {
        let provider = FakeProvider::replying(399, b"edge");
        let r = ParsedReference::parse("promenade+https://host/doc").unwrap();
        assert_eq!(fetch(&r, &provider).unwrap(), b"edge");
    }

    #[test]
    fn session_failure_propagates() {
        let r = ParsedReference::parse("deckhand+http://host/doc").unwrap();
        let err = fetch(&r, &BrokenProvider).unwrap_err();
        assert!(matches!(err, ResolveError::Session(_)));
        assert!(err.to_string().contains("identity backend unreachable"));
    }
}

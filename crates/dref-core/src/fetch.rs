//! Blocking HTTP GET plumbing shared by the plain-remote handler and the
//! bearer-token session.
//!
//! Uses the curl crate (libcurl): collects the full body in memory via a
//! write callback and reports the response status separately, so callers
//! decide their own status policy. Runs in the current thread; call from a
//! worker if used from async code.

use std::time::Duration;

use crate::session::ServiceResponse;

/// Options for a single GET.
#[derive(Debug, Clone)]
pub(crate) struct GetOptions {
    /// Basic auth credentials (username, password).
    pub basic_auth: Option<(String, String)>,
    /// Extra headers as full `Name: value` lines.
    pub headers: Vec<String>,
    /// Total request timeout.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for GetOptions {
    fn default() -> Self {
        GetOptions {
            basic_auth: None,
            headers: Vec::new(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(15),
        }
    }
}

/// Performs a GET and returns status plus full body bytes.
///
/// Follows redirects. Errors only on transport failure; HTTP error statuses
/// are returned to the caller unjudged.
pub(crate) fn http_get(url: &str, opts: &GetOptions) -> Result<ServiceResponse, curl::Error> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;

    if let Some((user, pass)) = &opts.basic_auth {
        easy.username(user)?;
        easy.password(pass)?;
    }

    if !opts.headers.is_empty() {
        let mut list = curl::easy::List::new();
        for header in &opts.headers {
            list.append(header)?;
        }
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()? as u32;
    Ok(ServiceResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = GetOptions::default();
        assert!(opts.basic_auth.is_none());
        assert!(opts.headers.is_empty());
        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert_eq!(opts.connect_timeout, Duration::from_secs(15));
    }
}

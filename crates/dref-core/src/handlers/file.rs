//! Local file fetch for `file://` references.

use crate::error::ResolveError;
use crate::reference::ParsedReference;

/// Reads the referenced file and returns its full contents.
///
/// A reference with no usable path (`file://` or `file:///`) is rejected as
/// invalid rather than silently resolving to nothing.
pub(super) fn fetch(reference: &ParsedReference) -> Result<Vec<u8>, ResolveError> {
    let path = reference.path();
    if path.is_empty() || path == "/" {
        return Err(ResolveError::invalid(format!(
            "file reference {} has no path",
            reference.as_str()
        )));
    }

    tracing::debug!(path, "reading design document from local file");
    std::fs::read(path).map_err(|source| ResolveError::Io {
        path: path.to_string(),
        source,
    })
}

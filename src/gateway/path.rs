use crate::{Error, Result};

/// Joins the upstream base and a caller-supplied path fragment.
///
/// A trailing `/` on the base is dropped so `https://host/api/` and
/// `https://host/api` produce the same URLs. The empty path yields the base
/// followed by a single `/`.
pub fn build_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Rejects path fragments that could escape the configured upstream base.
///
/// The fragment is appended to the base verbatim, so anything that changes
/// the authority or walks up the path hierarchy is refused. A query string
/// after `?` is allowed and passed through untouched.
pub fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Ok(());
    }

    if path.chars().any(|c| c.is_ascii_control()) {
        return Err(Error::invalid_path("control characters are not allowed"));
    }
    if path.contains('\\') {
        return Err(Error::invalid_path("backslashes are not allowed"));
    }
    if path.contains('#') {
        return Err(Error::invalid_path("fragments are not allowed"));
    }
    if path.contains("://") {
        return Err(Error::invalid_path("absolute URLs are not allowed"));
    }
    if path.starts_with('/') {
        return Err(Error::invalid_path("path must be relative to the upstream base"));
    }

    let route = path.split_once('?').map_or(path, |(route, _)| route);
    let segments: Vec<&str> = route.split('/').collect();
    let last = segments.len() - 1;

    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            // `jobs/` is fine, `jobs//1` is not
            if i == last {
                continue;
            }
            return Err(Error::invalid_path("empty path segments are not allowed"));
        }

        let lowered = segment.to_ascii_lowercase();
        if lowered.contains("%2f") || lowered.contains("%5c") {
            return Err(Error::invalid_path("encoded separators are not allowed"));
        }

        let decoded = lowered.replace("%2e", ".");
        if decoded == "." || decoded == ".." {
            return Err(Error::invalid_path("relative segments are not allowed"));
        }
    }

    Ok(())
}

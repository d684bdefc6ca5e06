use std::fs;
use std::path::Path;

use tracing::trace;

const MARKER_PREFIX: &str = ".bark-server-probe-";

/// Returns true if a file can actually be created inside `path`.
///
/// Existence and permission bits are not enough in sandboxed or
/// policy-restricted setups, so this creates a uniquely named marker file and
/// removes it again. The marker is removed on every exit path; a failed
/// removal is ignored.
pub fn is_writable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            trace!(path = %path.display(), "not a directory");
            return false;
        }
        Err(err) => {
            trace!(path = %path.display(), %err, "cannot stat");
            return false;
        }
    }

    let marker = match tempfile::Builder::new()
        .prefix(MARKER_PREFIX)
        .tempfile_in(path)
    {
        Ok(marker) => marker,
        Err(err) => {
            trace!(path = %path.display(), %err, "cannot create marker file");
            return false;
        }
    };

    let _ = marker.close();
    true
}

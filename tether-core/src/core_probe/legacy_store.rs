//! Legacy on-disk device identifier.
//!
//! Early releases of this library wrote the device identifier to a file
//! under the application's private storage. When that file survives an
//! upgrade its content must keep winning over the live platform read, or
//! the device would change identity server-side. Any read failure means
//! "no override" and falls through to the live read.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

/// Relative path of the identifier file under the private storage root.
pub const LEGACY_DEVICE_ID_FILE: &str = "tether/device_id";

/// At most this many bytes of the file are the identifier payload.
const MAX_LEGACY_ID_LEN: usize = 100;

/// Read the legacy identifier, if one was left behind.
///
/// The file handle is dropped on every exit path. `None` on any failure.
pub fn legacy_device_id(storage_root: &Path) -> Option<String> {
    let path = storage_root.join(LEGACY_DEVICE_ID_FILE);

    match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > 0 => {}
        Ok(_) => return None,
        Err(_) => return None,
    }

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "legacy device id file unreadable");
            return None;
        }
    };

    let mut buf = Vec::with_capacity(MAX_LEGACY_ID_LEN);
    match file.take(MAX_LEGACY_ID_LEN as u64).read_to_end(&mut buf) {
        Ok(0) => None,
        Ok(_) => {
            let id = String::from_utf8_lossy(&buf).into_owned();
            if id.is_empty() {
                None
            } else {
                debug!("using legacy device id left by a previous release");
                Some(id)
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed reading legacy device id");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_legacy(root: &Path, content: &[u8]) {
        let path = root.join(LEGACY_DEVICE_ID_FILE);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_reads_existing_identifier() {
        let dir = tempfile::tempdir().unwrap();
        write_legacy(dir.path(), b"abc123");
        assert_eq!(legacy_device_id(dir.path()), Some("abc123".to_string()));
    }

    #[test]
    fn test_missing_file_is_no_override() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(legacy_device_id(dir.path()), None);
    }

    #[test]
    fn test_empty_file_is_no_override() {
        let dir = tempfile::tempdir().unwrap();
        write_legacy(dir.path(), b"");
        assert_eq!(legacy_device_id(dir.path()), None);
    }

    #[test]
    fn test_payload_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let long = "x".repeat(500);
        write_legacy(dir.path(), long.as_bytes());
        let id = legacy_device_id(dir.path()).unwrap();
        assert_eq!(id.len(), MAX_LEGACY_ID_LEN);
    }
}

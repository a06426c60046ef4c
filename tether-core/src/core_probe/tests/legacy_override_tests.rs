//! Legacy-store precedence over the live settings read.

use std::fs;
use std::path::Path;

use crate::core_probe::android_id::ANDROID_ID_SETTING;
use crate::core_probe::legacy_store::LEGACY_DEVICE_ID_FILE;
use crate::core_probe::{android_id, android_id_hash};
use crate::core_hash::sha256_unpadded_hex;
use crate::platform::ScriptedPlatform;
use crate::signal::DeviceSignal;

fn write_legacy(root: &Path, content: &str) {
    let path = root.join(LEGACY_DEVICE_ID_FILE);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_legacy_file_wins_over_live_value() {
    let dir = tempfile::tempdir().unwrap();
    write_legacy(dir.path(), "abc123");

    let platform = ScriptedPlatform::new()
        .with_files_dir(dir.path())
        .with_setting(ANDROID_ID_SETTING, "3f2a77c01b9de884");

    assert_eq!(
        android_id(&platform),
        DeviceSignal::Present("abc123".to_string())
    );
    assert_eq!(
        android_id_hash(&platform).digest_hex(),
        Some(sha256_unpadded_hex("abc123").as_str())
    );
}

#[test]
fn test_empty_legacy_file_falls_through_to_live_value() {
    let dir = tempfile::tempdir().unwrap();
    write_legacy(dir.path(), "");

    let platform = ScriptedPlatform::new()
        .with_files_dir(dir.path())
        .with_setting(ANDROID_ID_SETTING, "3f2a77c01b9de884");

    assert_eq!(
        android_id(&platform),
        DeviceSignal::Present("3f2a77c01b9de884".to_string())
    );
}

#[test]
fn test_absent_legacy_file_falls_through() {
    let dir = tempfile::tempdir().unwrap();

    let platform = ScriptedPlatform::new()
        .with_files_dir(dir.path())
        .with_setting(ANDROID_ID_SETTING, "3f2a77c01b9de884");
    assert_eq!(
        android_id(&platform),
        DeviceSignal::Present("3f2a77c01b9de884".to_string())
    );

    // No override and no live value either.
    let bare = ScriptedPlatform::new().with_files_dir(dir.path());
    assert_eq!(android_id(&bare), DeviceSignal::Unavailable);
}

#[test]
fn test_legacy_override_bypasses_sentinel_check() {
    // The sentinel rejection applies to the live read only; an identifier
    // a previous release committed to disk is honored as-is.
    let dir = tempfile::tempdir().unwrap();
    write_legacy(dir.path(), "9774d56d682e549c");

    let platform = ScriptedPlatform::new().with_files_dir(dir.path());
    assert_eq!(
        android_id(&platform),
        DeviceSignal::Present("9774d56d682e549c".to_string())
    );
}

//! Android ID resolution.
//!
//! The legacy on-disk identifier, when present, takes precedence over the
//! live settings read: continuity across library upgrades matters more
//! than freshness. The settings value itself is rejected when it equals a
//! constant known to be duplicated across many devices by a manufacturer
//! firmware bug.

use tracing::debug;

use super::legacy_store;
use crate::platform::{SettingsProvider, StorageLocator};
use crate::signal::{DeviceSignal, HashedSignal};

/// Settings key holding the platform device identifier.
pub const ANDROID_ID_SETTING: &str = "android_id";

/// Android ID known to be duplicated across many devices due to
/// manufacturer bugs. Compared case-insensitively.
const INVALID_ANDROID_ID: &str = "9774d56d682e549c";

/// Resolve the raw Android ID.
pub fn android_id(platform: &(impl SettingsProvider + StorageLocator)) -> DeviceSignal {
    // A legacy release may have left a device id behind; it must keep
    // winning or user counts drift.
    if let Some(legacy) = legacy_store::legacy_device_id(&platform.files_dir()) {
        return DeviceSignal::present(legacy);
    }

    match platform.secure_string(ANDROID_ID_SETTING) {
        Some(raw) if raw.eq_ignore_ascii_case(INVALID_ANDROID_ID) => {
            debug!("android id equals the known duplicated value; treating as unavailable");
            DeviceSignal::Unavailable
        }
        Some(raw) => DeviceSignal::present(raw),
        None => DeviceSignal::Unavailable,
    }
}

/// Resolve the Android ID and hash it for transmission.
pub fn android_id_hash(platform: &(impl SettingsProvider + StorageLocator)) -> HashedSignal {
    android_id(platform).hashed()
}

//! Application manifest datapoints.
//!
//! These read our own package, which must exist for this code to be
//! running: a missing package is a contract violation and propagates as
//! `Err`, unlike every other resolver in this crate. A missing *field*
//! inside an existing manifest degrades gracefully.

use tracing::warn;

use crate::config::IdentityConfig;
use crate::platform::{PackageError, PackageSource};
use crate::signal::DeviceSignal;

/// Literal fallback when the manifest has no version name set.
pub const UNKNOWN_VERSION: &str = "unknown";

/// The application's version name.
pub fn app_version(platform: &impl PackageSource) -> Result<String, PackageError> {
    let package = platform.own_package()?;
    match package.version_name {
        Some(version) => Ok(version),
        None => {
            warn!("no version name in the manifest; reporting 'unknown'");
            Ok(UNKNOWN_VERSION.to_string())
        }
    }
}

/// The analytics app key from manifest metadata.
pub fn app_key(
    platform: &impl PackageSource,
    config: &IdentityConfig,
) -> Result<DeviceSignal, PackageError> {
    metadata_value(platform, &config.app_key_field)
}

/// The rollup key from manifest metadata.
pub fn rollup_key(
    platform: &impl PackageSource,
    config: &IdentityConfig,
) -> Result<DeviceSignal, PackageError> {
    metadata_value(platform, &config.rollup_key_field)
}

fn metadata_value(
    platform: &impl PackageSource,
    field: &str,
) -> Result<DeviceSignal, PackageError> {
    let package = platform.own_package()?;
    Ok(match package.metadata.get(field) {
        Some(value) => DeviceSignal::present(value.clone()),
        None => DeviceSignal::Unavailable,
    })
}

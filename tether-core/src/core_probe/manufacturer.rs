//! Manufacturer name resolution.

use tracing::warn;

use super::api_level;
use crate::platform::Platform;
use crate::signal::ApiLevel;

/// Literal fallback for platforms too old to expose the field. This is
/// transmitted content, not an absence marker.
pub const UNKNOWN_MANUFACTURER: &str = "unknown";

/// Resolve the device manufacturer's name.
///
/// The field was added in API 4; API 3 and below always resolve to the
/// literal `"unknown"`.
pub fn manufacturer(platform: &impl Platform) -> String {
    let api = api_level::detect(platform);
    if api > ApiLevel::new(3) {
        match platform.manufacturer() {
            Some(name) => return name,
            None => {
                warn!(%api, "platform did not expose a manufacturer name");
            }
        }
    }
    UNKNOWN_MANUFACTURER.to_string()
}

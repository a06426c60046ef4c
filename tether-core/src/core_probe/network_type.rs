//! Network type resolution.
//!
//! Always answers with *some* label: `"wifi"` when a permitted check shows
//! an active Wi-Fi connection, otherwise a label embedding the cellular
//! network-type code, or `"no_radio"` on a device with no radio at all.

use tracing::{info, warn};

use crate::platform::{Permission, Platform};

/// Label reported while on an active Wi-Fi connection.
pub const WIFI_NETWORK: &str = "wifi";

/// Label reported by a device with no cellular radio.
pub const NO_RADIO: &str = "no_radio";

/// Determine the type of network this device is connected to.
pub fn network_type(platform: &impl Platform) -> String {
    if platform.check_permission(Permission::AccessWifiState) {
        // The connectivity service sometimes refuses this check even for
        // callers holding the permission; that refusal must fall through
        // to the cellular answer, not escalate.
        match platform.wifi_connected() {
            Ok(true) => return WIFI_NETWORK.to_string(),
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "connectivity check refused; falling back to cellular type");
            }
        }
    } else {
        info!(
            permission = Permission::AccessWifiState.as_str(),
            "permission not granted; determining Wi-Fi connectivity is unavailable"
        );
    }

    match platform.network_type_code() {
        Some(code) => format!("android_network_type_{}", code),
        None => NO_RADIO.to_string(),
    }
}

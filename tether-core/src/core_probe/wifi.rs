//! Wi-Fi MAC address resolution.

use tracing::debug;

use super::{api_level, capability};
use crate::platform::Platform;
use crate::signal::{DeviceSignal, HashedSignal};

/// Resolve the hashed Wi-Fi MAC address.
///
/// Unavailable without the Wi-Fi permission or hardware, and also when
/// the adapter is currently not associated with any access point.
pub fn wifi_mac_hash(platform: &impl Platform) -> HashedSignal {
    let api = api_level::detect(platform);
    if !capability::wifi_capability(platform, api).granted {
        return HashedSignal::Unavailable;
    }

    match platform.connection_mac() {
        Some(mac) => DeviceSignal::present(mac).hashed(),
        None => {
            debug!("Wi-Fi adapter present but not associated; no MAC to read");
            HashedSignal::Unavailable
        }
    }
}

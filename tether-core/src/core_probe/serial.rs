//! Hardware serial resolution.

use super::{api_level, capability};
use crate::platform::Platform;
use crate::signal::{DeviceSignal, HashedSignal};

/// Resolve the hashed hardware serial.
///
/// The serial field only exists from API 9 on; older platforms resolve to
/// `Unavailable`, never an error.
pub fn serial_hash(platform: &impl Platform) -> HashedSignal {
    let api = api_level::detect(platform);
    if !capability::serial_capability(api).granted {
        return HashedSignal::Unavailable;
    }

    match platform.serial() {
        Some(serial) => DeviceSignal::present(serial).hashed(),
        None => HashedSignal::Unavailable,
    }
}

//! Telephony identifier resolution.

use super::{api_level, capability};
use crate::platform::Platform;
use crate::signal::DeviceSignal;

/// Resolve the telephony identifier (IMEI/MEID).
///
/// On capability denial the radio is never touched: the gate failing is
/// the answer.
pub fn telephony_id(platform: &impl Platform) -> DeviceSignal {
    let api = api_level::detect(platform);
    if !capability::telephony_capability(platform, api).granted {
        return DeviceSignal::Unavailable;
    }

    match platform.telephony_device_id() {
        Some(id) => DeviceSignal::present(id),
        None => DeviceSignal::Unavailable,
    }
}

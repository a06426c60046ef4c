//! Capability gates, consulted before any identifier read.
//!
//! Feature presence is only checked on platforms new enough to report it
//! reliably; below the floor the hardware is assumed possible and only the
//! permission gate applies. Denials are logged with the reason so field
//! diagnostics can tell "no permission" from "no hardware" from "platform
//! too old".

use tracing::{debug, info, warn};

use crate::platform::{Feature, FeatureRegistry, Permission, PermissionAuthority};
use crate::signal::{ApiLevel, CapabilityCheck, DenialReason};

pub const SOURCE_TELEPHONY_ID: &str = "telephony_id";
pub const SOURCE_WIFI_MAC: &str = "wifi_mac";
pub const SOURCE_SERIAL: &str = "serial";

/// Feature registry answers are reliable for telephony from this level on.
const TELEPHONY_FEATURE_MIN_API: ApiLevel = ApiLevel::new(7);

/// Feature registry answers are reliable for Wi-Fi from this level on.
const WIFI_FEATURE_MIN_API: ApiLevel = ApiLevel::new(8);

/// The hardware serial field exists from this level on.
const SERIAL_MIN_API: ApiLevel = ApiLevel::new(9);

/// May the telephony identifier be read?
pub fn telephony_capability(
    platform: &(impl FeatureRegistry + PermissionAuthority),
    api: ApiLevel,
) -> CapabilityCheck {
    if api >= TELEPHONY_FEATURE_MIN_API && !platform.has_system_feature(Feature::Telephony) {
        info!("device does not have telephony; cannot read telephony id");
        return CapabilityCheck::denied(SOURCE_TELEPHONY_ID, DenialReason::NoHardware);
    }

    if !platform.check_permission(Permission::ReadPhoneState) {
        warn!(
            permission = Permission::ReadPhoneState.as_str(),
            "permission not granted; determining telephony id is not possible"
        );
        return CapabilityCheck::denied(SOURCE_TELEPHONY_ID, DenialReason::NoPermission);
    }

    CapabilityCheck::granted(SOURCE_TELEPHONY_ID)
}

/// May the Wi-Fi MAC address be read?
pub fn wifi_capability(
    platform: &(impl FeatureRegistry + PermissionAuthority),
    api: ApiLevel,
) -> CapabilityCheck {
    if api >= WIFI_FEATURE_MIN_API && !platform.has_system_feature(Feature::Wifi) {
        info!("device does not have Wi-Fi; cannot read Wi-Fi MAC");
        return CapabilityCheck::denied(SOURCE_WIFI_MAC, DenialReason::NoHardware);
    }

    if !platform.check_permission(Permission::AccessWifiState) {
        // Less important than telephony id; most hosts never request this
        // permission, so keep the noise down.
        info!(
            permission = Permission::AccessWifiState.as_str(),
            "permission not granted; determining MAC address is not possible"
        );
        return CapabilityCheck::denied(SOURCE_WIFI_MAC, DenialReason::NoPermission);
    }

    CapabilityCheck::granted(SOURCE_WIFI_MAC)
}

/// May the hardware serial be read on this platform version?
pub fn serial_capability(api: ApiLevel) -> CapabilityCheck {
    if api < SERIAL_MIN_API {
        debug!(%api, "platform predates the serial field");
        return CapabilityCheck::denied(SOURCE_SERIAL, DenialReason::OsTooOld);
    }
    CapabilityCheck::granted(SOURCE_SERIAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ScriptedPlatform;

    #[test]
    fn test_telephony_denied_without_permission() {
        let platform = ScriptedPlatform::new().with_feature(Feature::Telephony);
        let check = telephony_capability(&platform, ApiLevel::new(19));
        assert!(!check.granted);
        assert_eq!(check.reason, DenialReason::NoPermission);
    }

    #[test]
    fn test_telephony_denied_without_hardware() {
        let platform = ScriptedPlatform::new().with_permission(Permission::ReadPhoneState);
        let check = telephony_capability(&platform, ApiLevel::new(19));
        assert!(!check.granted);
        assert_eq!(check.reason, DenialReason::NoHardware);
    }

    #[test]
    fn test_telephony_feature_check_skipped_on_old_platform() {
        // API 6 predates reliable feature reporting: hardware is assumed
        // possible and only the permission gate applies.
        let platform = ScriptedPlatform::new().with_permission(Permission::ReadPhoneState);
        let check = telephony_capability(&platform, ApiLevel::new(6));
        assert!(check.granted);
    }

    #[test]
    fn test_wifi_gates() {
        let platform = ScriptedPlatform::new()
            .with_feature(Feature::Wifi)
            .with_permission(Permission::AccessWifiState);
        assert!(wifi_capability(&platform, ApiLevel::new(19)).granted);

        let no_hw = ScriptedPlatform::new().with_permission(Permission::AccessWifiState);
        let check = wifi_capability(&no_hw, ApiLevel::new(19));
        assert_eq!(check.reason, DenialReason::NoHardware);

        let check = wifi_capability(&no_hw, ApiLevel::new(7));
        assert!(check.granted, "feature check must be skipped below API 8");
    }

    #[test]
    fn test_serial_gate_is_version_only() {
        assert!(!serial_capability(ApiLevel::new(8)).granted);
        assert_eq!(
            serial_capability(ApiLevel::new(8)).reason,
            DenialReason::OsTooOld
        );
        assert!(serial_capability(ApiLevel::new(9)).granted);
    }
}

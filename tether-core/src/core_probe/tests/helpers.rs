//! Test helpers and fixtures

use crate::platform::{Feature, Permission, ScriptedPlatform};

/// A fully equipped modern handset: API 19, telephony and Wi-Fi hardware,
/// both runtime permissions granted.
pub fn modern_handset() -> ScriptedPlatform {
    ScriptedPlatform::new()
        .with_api_level(19)
        .with_feature(Feature::Telephony)
        .with_feature(Feature::Wifi)
        .with_permission(Permission::ReadPhoneState)
        .with_permission(Permission::AccessWifiState)
}

/// A bare device that grants and reports nothing, at the given API level.
pub fn locked_down_handset(api: i32) -> ScriptedPlatform {
    ScriptedPlatform::new().with_api_level(api)
}

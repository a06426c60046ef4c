//! Boundary contracts for the host platform.
//!
//! Each trait models one external collaborator the resolvers read from.
//! Implementations wrap the real OS bindings on device; [`ScriptedPlatform`]
//! is the in-memory implementation used by tests and the dev harness.
//!
//! Every accessor returns an explicit `Option`/`Result` instead of raising
//! on absence; "the platform would not tell us" is a first-class answer.

use std::collections::HashMap;
use std::path::PathBuf;

mod error;
mod scripted;

pub use error::{AttributionError, PackageError, PolicyDenied};
pub use scripted::{ScriptedAttribution, ScriptedPlatform, ScriptedWifiCheck};

/// A runtime permission the host application may or may not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ReadPhoneState,
    AccessWifiState,
}

impl Permission {
    /// The platform constant, as the permission authority spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::ReadPhoneState => "android.permission.READ_PHONE_STATE",
            Permission::AccessWifiState => "android.permission.ACCESS_WIFI_STATE",
        }
    }
}

/// A hardware feature the device may or may not report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Telephony,
    Wifi,
}

impl Feature {
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Telephony => "android.hardware.telephony",
            Feature::Wifi => "android.hardware.wifi",
        }
    }
}

/// Manifest data for the host application's own package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
    /// Version name from the manifest; optional there, so optional here.
    pub version_name: Option<String>,
    /// Free-form metadata key/value pairs from the manifest.
    pub metadata: HashMap<String, String>,
}

/// Read-only key lookup into the platform's secure settings store.
pub trait SettingsProvider {
    fn secure_string(&self, key: &str) -> Option<String>;
}

/// Live permission check. Grants can be inconsistent (a declared permission
/// can still be denied), so callers re-check on every resolution and never
/// cache the answer.
pub trait PermissionAuthority {
    fn check_permission(&self, permission: Permission) -> bool;
}

/// Hardware feature registry. Only trustworthy from a minimum platform
/// version onward; the capability prober decides when to consult it.
pub trait FeatureRegistry {
    fn has_system_feature(&self, feature: Feature) -> bool;
}

/// Telephony subsystem accessor.
pub trait TelephonyAccessor {
    /// The telephony identifier (IMEI/MEID). `None` when the radio cannot
    /// provide one.
    fn telephony_device_id(&self) -> Option<String>;

    /// The cellular network-type code. `None` on a device with no radio
    /// at all.
    fn network_type_code(&self) -> Option<i32>;
}

/// Wi-Fi adapter accessor.
pub trait WifiAccessor {
    /// MAC address of the adapter; `None` when Wi-Fi is disabled or not
    /// associated with an access point.
    fn connection_mac(&self) -> Option<String>;
}

/// Connectivity state accessor. The check itself can be refused by
/// security policy even when the caller nominally holds the permission.
pub trait ConnectivityAccessor {
    fn wifi_connected(&self) -> Result<bool, PolicyDenied>;
}

/// A row handle returned by an attribution-provider query. Released when
/// dropped, on every exit path.
pub trait AttributionCursor {
    fn string_value(&mut self, column: &str) -> Option<String>;
}

/// Third-party attribution content provider.
pub trait AttributionSource {
    /// `Ok(None)` when the provider is not installed; `Err` when the query
    /// itself fails.
    fn query_attribution(
        &self,
        uri: &str,
        column: &str,
    ) -> Result<Option<Box<dyn AttributionCursor>>, AttributionError>;
}

/// Package registry, scoped to the host application's own package.
pub trait PackageSource {
    /// Manifest data for our own package. The package must exist for this
    /// code to be running at all, so `Err` is a contract violation the
    /// caller should propagate, not swallow.
    fn own_package(&self) -> Result<PackageInfo, PackageError>;
}

/// Build/version fields reported by the platform.
pub trait BuildInfo {
    /// The version field as a string; the primary API-level source.
    fn sdk_version_string(&self) -> Option<String>;

    /// The already-integer version field; the fallback API-level source.
    fn sdk_version_int(&self) -> Option<i32>;

    /// Manufacturer name; absent on platforms too old to expose it.
    fn manufacturer(&self) -> Option<String>;

    /// Hardware serial; absent below the platform version that added it.
    fn serial(&self) -> Option<String>;
}

/// Locator for the application's private storage root.
pub trait StorageLocator {
    fn files_dir(&self) -> PathBuf;
}

/// The full set of platform collaborators a resolver may touch.
pub trait Platform:
    SettingsProvider
    + PermissionAuthority
    + FeatureRegistry
    + TelephonyAccessor
    + WifiAccessor
    + ConnectivityAccessor
    + AttributionSource
    + PackageSource
    + BuildInfo
    + StorageLocator
{
}

impl<T> Platform for T where
    T: SettingsProvider
        + PermissionAuthority
        + FeatureRegistry
        + TelephonyAccessor
        + WifiAccessor
        + ConnectivityAccessor
        + AttributionSource
        + PackageSource
        + BuildInfo
        + StorageLocator
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_constants() {
        assert_eq!(
            Permission::ReadPhoneState.as_str(),
            "android.permission.READ_PHONE_STATE"
        );
        assert_eq!(
            Permission::AccessWifiState.as_str(),
            "android.permission.ACCESS_WIFI_STATE"
        );
    }

    #[test]
    fn test_feature_constants() {
        assert_eq!(Feature::Telephony.as_str(), "android.hardware.telephony");
        assert_eq!(Feature::Wifi.as_str(), "android.hardware.wifi");
    }
}

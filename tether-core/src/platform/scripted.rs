//! In-memory platform with scripted answers.
//!
//! Used by the test suites and the dev harness to stand in for a real
//! handset. Builder-style setters script each collaborator; read counters
//! make "the resolver never touched the radio" observable.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::{
    AttributionCursor, AttributionError, AttributionSource, BuildInfo, ConnectivityAccessor,
    Feature, FeatureRegistry, PackageError, PackageInfo, PackageSource, Permission,
    PermissionAuthority, PolicyDenied, SettingsProvider, StorageLocator, TelephonyAccessor,
    WifiAccessor,
};

/// Scripted answer for the Wi-Fi connectivity check.
#[derive(Debug, Clone)]
pub enum ScriptedWifiCheck {
    Connected,
    Disconnected,
    /// The check itself is refused by security policy.
    PolicyRefused,
}

/// Scripted behavior of the attribution provider.
#[derive(Debug, Clone)]
pub enum ScriptedAttribution {
    /// Provider not installed; queries return no cursor.
    Missing,
    /// Queries fail outright.
    Fails(String),
    /// Provider installed and holding a cookie.
    Cookie(String),
    /// Provider installed but the cursor has no row.
    EmptyCursor,
}

/// An in-memory [`Platform`](super::Platform) whose every answer is
/// scripted up front.
pub struct ScriptedPlatform {
    settings: HashMap<String, String>,
    permissions: HashSet<Permission>,
    features: HashSet<Feature>,
    telephony_device_id: Option<String>,
    network_type_code: Option<i32>,
    wifi_mac: Option<String>,
    wifi_check: ScriptedWifiCheck,
    package: Option<PackageInfo>,
    sdk_version_string: Option<String>,
    sdk_version_int: Option<i32>,
    manufacturer: Option<String>,
    serial: Option<String>,
    files_dir: PathBuf,
    attribution: ScriptedAttribution,
    telephony_reads: AtomicUsize,
    cursor_drops: Arc<AtomicUsize>,
}

impl Default for ScriptedPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedPlatform {
    /// A platform that answers nothing: no permissions, no features, no
    /// version fields, an empty package manifest.
    pub fn new() -> Self {
        ScriptedPlatform {
            settings: HashMap::new(),
            permissions: HashSet::new(),
            features: HashSet::new(),
            telephony_device_id: None,
            network_type_code: None,
            wifi_mac: None,
            wifi_check: ScriptedWifiCheck::Disconnected,
            package: Some(PackageInfo::default()),
            sdk_version_string: None,
            sdk_version_int: None,
            manufacturer: None,
            serial: None,
            files_dir: PathBuf::new(),
            attribution: ScriptedAttribution::Missing,
            telephony_reads: AtomicUsize::new(0),
            cursor_drops: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permissions.insert(permission);
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.insert(feature);
        self
    }

    pub fn with_telephony_device_id(mut self, id: impl Into<String>) -> Self {
        self.telephony_device_id = Some(id.into());
        self
    }

    pub fn with_network_type_code(mut self, code: i32) -> Self {
        self.network_type_code = Some(code);
        self
    }

    pub fn with_wifi_mac(mut self, mac: impl Into<String>) -> Self {
        self.wifi_mac = Some(mac.into());
        self
    }

    pub fn with_wifi_check(mut self, check: ScriptedWifiCheck) -> Self {
        self.wifi_check = check;
        self
    }

    /// Script the fatal condition: our own package missing from the
    /// registry.
    pub fn without_package(mut self) -> Self {
        self.package = None;
        self
    }

    pub fn with_version_name(mut self, version: impl Into<String>) -> Self {
        self.package
            .get_or_insert_with(PackageInfo::default)
            .version_name = Some(version.into());
        self
    }

    pub fn with_manifest_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.package
            .get_or_insert_with(PackageInfo::default)
            .metadata
            .insert(key.into(), value.into());
        self
    }

    /// Script both version fields from one API level.
    pub fn with_api_level(mut self, level: i32) -> Self {
        self.sdk_version_string = Some(level.to_string());
        self.sdk_version_int = Some(level);
        self
    }

    pub fn with_sdk_version_string(mut self, s: impl Into<String>) -> Self {
        self.sdk_version_string = Some(s.into());
        self
    }

    pub fn with_sdk_version_int(mut self, level: i32) -> Self {
        self.sdk_version_int = Some(level);
        self
    }

    pub fn with_manufacturer(mut self, name: impl Into<String>) -> Self {
        self.manufacturer = Some(name.into());
        self
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = Some(serial.into());
        self
    }

    pub fn with_files_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.files_dir = dir.into();
        self
    }

    pub fn with_attribution(mut self, attribution: ScriptedAttribution) -> Self {
        self.attribution = attribution;
        self
    }

    /// How many times the telephony identifier was actually read.
    pub fn telephony_read_count(&self) -> usize {
        self.telephony_reads.load(Ordering::SeqCst)
    }

    /// How many attribution cursors have been released so far.
    pub fn cursor_drop_count(&self) -> usize {
        self.cursor_drops.load(Ordering::SeqCst)
    }
}

impl SettingsProvider for ScriptedPlatform {
    fn secure_string(&self, key: &str) -> Option<String> {
        self.settings.get(key).cloned()
    }
}

impl PermissionAuthority for ScriptedPlatform {
    fn check_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

impl FeatureRegistry for ScriptedPlatform {
    fn has_system_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

impl TelephonyAccessor for ScriptedPlatform {
    fn telephony_device_id(&self) -> Option<String> {
        self.telephony_reads.fetch_add(1, Ordering::SeqCst);
        self.telephony_device_id.clone()
    }

    fn network_type_code(&self) -> Option<i32> {
        self.network_type_code
    }
}

impl WifiAccessor for ScriptedPlatform {
    fn connection_mac(&self) -> Option<String> {
        self.wifi_mac.clone()
    }
}

impl ConnectivityAccessor for ScriptedPlatform {
    fn wifi_connected(&self) -> Result<bool, PolicyDenied> {
        match &self.wifi_check {
            ScriptedWifiCheck::Connected => Ok(true),
            ScriptedWifiCheck::Disconnected => Ok(false),
            ScriptedWifiCheck::PolicyRefused => {
                Err(PolicyDenied("connectivity state".to_string()))
            }
        }
    }
}

struct ScriptedCursor {
    value: Option<String>,
    drops: Arc<AtomicUsize>,
}

impl AttributionCursor for ScriptedCursor {
    fn string_value(&mut self, _column: &str) -> Option<String> {
        self.value.clone()
    }
}

impl Drop for ScriptedCursor {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl AttributionSource for ScriptedPlatform {
    fn query_attribution(
        &self,
        _uri: &str,
        _column: &str,
    ) -> Result<Option<Box<dyn AttributionCursor>>, AttributionError> {
        match &self.attribution {
            ScriptedAttribution::Missing => Ok(None),
            ScriptedAttribution::Fails(reason) => {
                Err(AttributionError::QueryFailed(reason.clone()))
            }
            ScriptedAttribution::Cookie(value) => Ok(Some(Box::new(ScriptedCursor {
                value: Some(value.clone()),
                drops: Arc::clone(&self.cursor_drops),
            }))),
            ScriptedAttribution::EmptyCursor => Ok(Some(Box::new(ScriptedCursor {
                value: None,
                drops: Arc::clone(&self.cursor_drops),
            }))),
        }
    }
}

impl PackageSource for ScriptedPlatform {
    fn own_package(&self) -> Result<PackageInfo, PackageError> {
        self.package.clone().ok_or(PackageError::OwnPackageMissing)
    }
}

impl BuildInfo for ScriptedPlatform {
    fn sdk_version_string(&self) -> Option<String> {
        self.sdk_version_string.clone()
    }

    fn sdk_version_int(&self) -> Option<i32> {
        self.sdk_version_int
    }

    fn manufacturer(&self) -> Option<String> {
        self.manufacturer.clone()
    }

    fn serial(&self) -> Option<String> {
        self.serial.clone()
    }
}

impl StorageLocator for ScriptedPlatform {
    fn files_dir(&self) -> PathBuf {
        self.files_dir.clone()
    }
}

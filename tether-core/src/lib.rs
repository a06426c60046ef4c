//! Tether core — anonymous device-identity resolution for analytics
//! attribution.
//!
//! Every identifier source on a handset can legitimately be unreadable at
//! runtime (permission withheld, hardware absent, platform too old,
//! manufacturer bug). Each resolver in this crate probes its source's
//! capability gates, performs at most one platform read, and collapses the
//! outcome to either a value or an explicit `Unavailable` marker. Absence
//! is a steady-state answer here, never an error.
//!
//! Identifier hashing deliberately reproduces a historical encoding defect
//! (see [`core_hash`]); servers key records on the defective form.

pub mod config;
pub mod core_hash;
pub mod core_probe;
pub mod logging;
pub mod platform;
pub mod signal;

pub use config::{ConfigError, IdentityConfig};
pub use core_hash::sha256_unpadded_hex;
pub use core_probe::{
    android_id, android_id_hash, app_key, app_version, attribution_cookie, detect_api_level,
    manufacturer, network_type, rollup_key, serial_hash, telephony_id, wifi_mac_hash,
};
pub use logging::{init_logging, LogLevel};
pub use signal::{ApiLevel, CapabilityCheck, DenialReason, DeviceSignal, HashedSignal};

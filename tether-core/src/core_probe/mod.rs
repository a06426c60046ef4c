//! Identifier resolvers.
//!
//! One resolver per identifier source, each composing the same pipeline:
//! capability gates, then at most one platform read, then (where the
//! server expects a hashed datapoint) the one-way hasher. Resolvers are
//! free functions with no shared mutable state; each is independently
//! callable and reentrant, and every gate failure collapses to an
//! explicit `Unavailable` rather than an error.

pub mod android_id;
pub mod api_level;
pub mod app_meta;
pub mod attribution;
pub mod capability;
pub mod legacy_store;
pub mod manufacturer;
pub mod network_type;
pub mod serial;
pub mod telephony;
pub mod wifi;

#[cfg(test)]
mod tests;

pub use android_id::{android_id, android_id_hash};
pub use api_level::detect as detect_api_level;
pub use app_meta::{app_key, app_version, rollup_key};
pub use attribution::attribution_cookie;
pub use manufacturer::manufacturer;
pub use network_type::network_type;
pub use serial::serial_hash;
pub use telephony::telephony_id;
pub use wifi::wifi_mac_hash;

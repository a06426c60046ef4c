//! Value types shared by every resolver.
//!
//! All of these are constructed fresh per resolution call and handed to the
//! caller by value. Nothing in this crate caches them.

use std::fmt;

use crate::core_hash::sha256_unpadded_hex;

/// Outcome of reading one identifier source: either the raw value or an
/// explicit marker that the source could not be read.
///
/// A signal is never present with an empty value; [`DeviceSignal::present`]
/// collapses empty input to `Unavailable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSignal {
    /// The source yielded a non-empty raw value.
    Present(String),
    /// The source could not be read; an expected steady-state outcome.
    Unavailable,
}

impl DeviceSignal {
    /// Wrap a raw value, mapping empty input to `Unavailable`.
    pub fn present(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            DeviceSignal::Unavailable
        } else {
            DeviceSignal::Present(raw)
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, DeviceSignal::Present(_))
    }

    /// The raw value, if the source was readable.
    pub fn value(&self) -> Option<&str> {
        match self {
            DeviceSignal::Present(raw) => Some(raw),
            DeviceSignal::Unavailable => None,
        }
    }

    /// One-way hash of the raw value, preserving availability.
    pub fn hashed(&self) -> HashedSignal {
        match self {
            DeviceSignal::Present(raw) => HashedSignal::Present(sha256_unpadded_hex(raw)),
            DeviceSignal::Unavailable => HashedSignal::Unavailable,
        }
    }
}

/// A [`DeviceSignal`] after the one-way hashing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashedSignal {
    /// Hex digest of the raw value, in the historical unpadded encoding.
    Present(String),
    Unavailable,
}

impl HashedSignal {
    pub fn is_present(&self) -> bool {
        matches!(self, HashedSignal::Present(_))
    }

    pub fn digest_hex(&self) -> Option<&str> {
        match self {
            HashedSignal::Present(hex) => Some(hex),
            HashedSignal::Unavailable => None,
        }
    }
}

/// Why a capability gate refused an identifier source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    NoPermission,
    NoHardware,
    OsTooOld,
    Unknown,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DenialReason::NoPermission => "no permission",
            DenialReason::NoHardware => "no hardware",
            DenialReason::OsTooOld => "os too old",
            DenialReason::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Result of probing one source's capability gates.
///
/// Diagnostic only: resolvers branch on `granted`, never on `reason`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityCheck {
    pub source: &'static str,
    pub granted: bool,
    pub reason: DenialReason,
}

impl CapabilityCheck {
    pub fn granted(source: &'static str) -> Self {
        CapabilityCheck {
            source,
            granted: true,
            reason: DenialReason::Unknown,
        }
    }

    pub fn denied(source: &'static str, reason: DenialReason) -> Self {
        CapabilityCheck {
            source,
            granted: false,
            reason,
        }
    }
}

/// The platform's reported API level.
///
/// Immutable for a running process, cheap to recompute, safe to cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApiLevel(i32);

impl ApiLevel {
    /// Oldest platform version this library has ever shipped on; the
    /// conservative default when the version cannot be determined.
    pub const OLDEST_SUPPORTED: ApiLevel = ApiLevel(3);

    pub const fn new(level: i32) -> Self {
        ApiLevel(level)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

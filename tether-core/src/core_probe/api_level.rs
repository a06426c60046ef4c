//! API-level detection.
//!
//! The version string field is the primary source; it has been deprecated
//! upstream for years and could disappear, so the already-integer field is
//! kept as a fallback. Detection never fails the caller: when both reads
//! come up empty the oldest supported level is assumed.

use tracing::warn;

use crate::platform::BuildInfo;
use crate::signal::ApiLevel;

/// Determine the platform's API level. Infallible.
pub fn detect(build: &impl BuildInfo) -> ApiLevel {
    if let Some(raw) = build.sdk_version_string() {
        match raw.trim().parse::<i32>() {
            Ok(level) => return ApiLevel::new(level),
            Err(e) => {
                warn!(raw = %raw, error = %e, "version string did not parse; trying integer field");
            }
        }
    }

    if let Some(level) = build.sdk_version_int() {
        return ApiLevel::new(level);
    }

    warn!(
        assumed = %ApiLevel::OLDEST_SUPPORTED,
        "no version field readable; assuming oldest supported platform"
    );
    ApiLevel::OLDEST_SUPPORTED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ScriptedPlatform;

    #[test]
    fn test_primary_string_field_wins() {
        let platform = ScriptedPlatform::new()
            .with_sdk_version_string("19")
            .with_sdk_version_int(18);
        assert_eq!(detect(&platform), ApiLevel::new(19));
    }

    #[test]
    fn test_unparseable_string_falls_back_to_int() {
        let platform = ScriptedPlatform::new()
            .with_sdk_version_string("KITKAT")
            .with_sdk_version_int(19);
        assert_eq!(detect(&platform), ApiLevel::new(19));
    }

    #[test]
    fn test_missing_string_falls_back_to_int() {
        let platform = ScriptedPlatform::new().with_sdk_version_int(8);
        assert_eq!(detect(&platform), ApiLevel::new(8));
    }

    #[test]
    fn test_both_fields_missing_assumes_oldest() {
        let platform = ScriptedPlatform::new();
        let level = detect(&platform);
        assert_eq!(level, ApiLevel::OLDEST_SUPPORTED);
        assert!(level >= ApiLevel::OLDEST_SUPPORTED);
    }

    #[test]
    fn test_whitespace_in_string_is_tolerated() {
        let platform = ScriptedPlatform::new().with_sdk_version_string(" 10 ");
        assert_eq!(detect(&platform), ApiLevel::new(10));
    }
}

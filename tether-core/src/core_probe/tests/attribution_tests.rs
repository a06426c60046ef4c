//! Attribution cookie resolution and cursor lifecycle.

use crate::config::IdentityConfig;
use crate::core_probe::attribution_cookie;
use crate::platform::{ScriptedAttribution, ScriptedPlatform};
use crate::signal::DeviceSignal;

#[test]
fn test_cookie_read_from_installed_provider() {
    let config = IdentityConfig::default();
    let platform = ScriptedPlatform::new()
        .with_attribution(ScriptedAttribution::Cookie("aid-77f3".to_string()));

    assert_eq!(
        attribution_cookie(&platform, &config),
        DeviceSignal::Present("aid-77f3".to_string())
    );
    assert_eq!(platform.cursor_drop_count(), 1);
}

#[test]
fn test_missing_provider_is_unavailable() {
    let config = IdentityConfig::default();
    let platform = ScriptedPlatform::new().with_attribution(ScriptedAttribution::Missing);

    assert_eq!(
        attribution_cookie(&platform, &config),
        DeviceSignal::Unavailable
    );
    assert_eq!(platform.cursor_drop_count(), 0);
}

#[test]
fn test_query_failure_is_unavailable() {
    let config = IdentityConfig::default();
    let platform = ScriptedPlatform::new()
        .with_attribution(ScriptedAttribution::Fails("provider crashed".to_string()));

    assert_eq!(
        attribution_cookie(&platform, &config),
        DeviceSignal::Unavailable
    );
}

#[test]
fn test_cursor_released_on_empty_row_path() {
    let config = IdentityConfig::default();
    let platform = ScriptedPlatform::new().with_attribution(ScriptedAttribution::EmptyCursor);

    assert_eq!(
        attribution_cookie(&platform, &config),
        DeviceSignal::Unavailable
    );
    assert_eq!(platform.cursor_drop_count(), 1);
}

#[test]
fn test_every_query_releases_its_cursor() {
    let config = IdentityConfig::default();
    let platform = ScriptedPlatform::new()
        .with_attribution(ScriptedAttribution::Cookie("aid-77f3".to_string()));

    for _ in 0..3 {
        let _ = attribution_cookie(&platform, &config);
    }
    assert_eq!(platform.cursor_drop_count(), 3);
}

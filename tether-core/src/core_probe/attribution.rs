//! Third-party attribution cookie.

use tracing::warn;

use crate::config::IdentityConfig;
use crate::platform::AttributionSource;
use crate::signal::DeviceSignal;

/// Read the install-time attribution cookie from the third-party
/// provider.
///
/// The provider may simply not be installed, and its queries fail in the
/// field for all sorts of reasons; every failure degrades to
/// `Unavailable`. The query cursor is dropped on every exit path.
pub fn attribution_cookie(
    platform: &impl AttributionSource,
    config: &IdentityConfig,
) -> DeviceSignal {
    match platform.query_attribution(&config.attribution_uri, &config.attribution_column) {
        Ok(Some(mut cursor)) => match cursor.string_value(&config.attribution_column) {
            Some(cookie) => DeviceSignal::present(cookie),
            None => DeviceSignal::Unavailable,
        },
        Ok(None) => DeviceSignal::Unavailable,
        Err(e) => {
            warn!(error = %e, uri = %config.attribution_uri, "error reading attribution cookie");
            DeviceSignal::Unavailable
        }
    }
}

//! Dev harness: runs every resolver against a scripted in-memory handset
//! and prints the resolved datapoints.
//!
//! Useful for eyeballing resolver behavior and log output without a real
//! device attached.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tether_core::logging::{init_logging_with_config, LogConfig, LogLevel};
use tether_core::platform::{
    Feature, Permission, ScriptedAttribution, ScriptedPlatform, ScriptedWifiCheck,
};
use tether_core::{
    android_id_hash, app_key, app_version, attribution_cookie, detect_api_level, manufacturer,
    network_type, serial_hash, telephony_id, wifi_mac_hash, HashedSignal, IdentityConfig,
};

#[derive(Parser, Debug)]
#[command(name = "tether-harness")]
#[command(about = "Resolve identity datapoints against a scripted handset", long_about = None)]
struct Args {
    /// Set the log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Emit resolver output as JSON
    #[arg(long)]
    json: bool,

    /// API level the scripted handset reports
    #[arg(long, default_value = "19")]
    api_level: i32,

    /// Withhold the READ_PHONE_STATE permission
    #[arg(long)]
    deny_phone_state: bool,

    /// Withhold the ACCESS_WIFI_STATE permission
    #[arg(long)]
    deny_wifi_state: bool,
}

fn scripted_handset(args: &Args) -> ScriptedPlatform {
    let mut platform = ScriptedPlatform::new()
        .with_api_level(args.api_level)
        .with_feature(Feature::Telephony)
        .with_feature(Feature::Wifi)
        .with_setting("android_id", "3f2a77c01b9de884")
        .with_serial("0149C52BA602")
        .with_telephony_device_id("355402091544377")
        .with_wifi_mac("00:0a:95:9d:68:16")
        .with_wifi_check(ScriptedWifiCheck::Connected)
        .with_network_type_code(10)
        .with_manufacturer("acme")
        .with_version_name("2.4.1")
        .with_manifest_metadata("TETHER_APP_KEY", "demo-app-key")
        .with_attribution(ScriptedAttribution::Cookie("aid-demo".to_string()));

    if !args.deny_phone_state {
        platform = platform.with_permission(Permission::ReadPhoneState);
    }
    if !args.deny_wifi_state {
        platform = platform.with_permission(Permission::AccessWifiState);
    }
    platform
}

fn hashed_field(signal: &HashedSignal) -> serde_json::Value {
    match signal.digest_hex() {
        Some(hex) => serde_json::Value::String(hex.to_string()),
        None => serde_json::Value::Null,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = LogLevel::from_str(&args.log_level).unwrap_or_else(|| {
        eprintln!("Invalid log level '{}', using 'info'", args.log_level);
        LogLevel::Info
    });
    init_logging_with_config(LogConfig::new(log_level))?;

    let config = IdentityConfig::default();
    let platform = scripted_handset(&args);

    info!(api_level = %detect_api_level(&platform), "resolving against scripted handset");

    let telephony = telephony_id(&platform);
    let output = serde_json::json!({
        "api_level": detect_api_level(&platform).value(),
        "android_id_hash": hashed_field(&android_id_hash(&platform)),
        "serial_hash": hashed_field(&serial_hash(&platform)),
        "telephony_id": telephony.value(),
        "wifi_mac_hash": hashed_field(&wifi_mac_hash(&platform)),
        "network_type": network_type(&platform),
        "manufacturer": manufacturer(&platform),
        "app_version": app_version(&platform)?,
        "app_key": app_key(&platform, &config)?.value(),
        "attribution_cookie": attribution_cookie(&platform, &config).value(),
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let map = output.as_object().expect("output is an object");
        for (name, value) in map {
            match value {
                serde_json::Value::Null => println!("{:<20} unavailable", name),
                serde_json::Value::String(s) => println!("{:<20} {}", name, s),
                other => println!("{:<20} {}", name, other),
            }
        }
    }

    Ok(())
}

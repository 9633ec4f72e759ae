use clap::{CommandFactory, Parser};
use client::{DeviceFilter, EnvStore, JamfConfig, JamfSchool};
use log::{info, LevelFilter};
use simplelog::{Config, SimpleLogger};
use std::process::exit;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Location (network) id used as API username
    #[clap(long = "location_id", env = "JAMF_LOCATION_ID", value_parser)]
    location_id: Option<String>,

    /// API key of the location
    #[clap(long = "api_key", env = "JAMF_API_KEY", value_parser, hide_env_values = true)]
    api_key: Option<String>,

    /// Jamf School API URL, for example https://api.zuludesk.com/
    #[clap(long, env = "JAMF_URL", value_parser)]
    url: Option<String>,

    /// One of error, warn, info or debug
    #[clap(long = "log-level", env = "JAMF_LOG_LEVEL", default_value = "warn", value_parser)]
    log_level: String,
}

fn log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        _ => LevelFilter::Warn,
    }
}

fn main() {
    let args = Args::parse();
    let _ = SimpleLogger::init(log_level(&args.log_level), Config::default());

    let url = match args.url.as_deref().filter(|value| !value.is_empty()) {
        Some(result) => result,
        None => {
            let _ = Args::command().print_help();
            println!();
            println!("[jamfschool] No API URL provided!");
            exit(2);
        }
    };

    let config = JamfConfig::new(
        args.location_id.as_deref(),
        args.api_key.as_deref(),
        Some(url),
    );
    let session = match JamfSchool::new(&config, &EnvStore::default()) {
        Ok(result) => result,
        Err(err) => {
            println!("[jamfschool] Could not connect to Jamf School: {err}");
            exit(1);
        }
    };

    let devices = match session.list_devices(&DeviceFilter::default()) {
        Ok(result) => result,
        Err(err) => {
            println!("[jamfschool] Failed to list devices: {err}");
            exit(1);
        }
    };

    for device in &devices {
        println!(
            "{}: {}",
            device.serial_number,
            device.wifi_mac_address().unwrap_or_default()
        );
    }
    info!("[jamfschool] Listed {} devices", devices.len());
}

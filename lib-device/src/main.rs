// Command line parsing
use clap::Parser;

// System related
use log::{error, info};

// Local crate related
use aquamon_device::{mqtt, settings, simulator};

/// This doc string acts as a help message when the user runs '--help'
/// as do all doc strings on fields
#[derive(Parser)]
#[clap(version)]
struct Opts {
    /// Path to the device configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: String,
}

#[tokio::main]
async fn main() {
    // Get the config path
    let opts: Opts = Opts::parse();

    // Initialize the logger from the environment
    env_logger::init();

    // Parse config file
    let settings = settings::DeviceSettings::new(opts.config.clone()).unwrap_or_else(|e| {
        error!("Unable to parse config at: {}. Error: {}", &opts.config, e);
        std::process::exit(1);
    });

    // Delivery quality for the publish loop
    let qos = settings.device.qos().unwrap_or_else(|e| {
        error!("Invalid config. Error: {}", e);
        std::process::exit(1);
    });

    // Set up the TLS client identity
    let mut link = mqtt::MqttLink::new(&settings.mqtt, qos).unwrap_or_else(|e| {
        error!("Unable to load certificates. Error: {}", e);
        std::process::exit(1);
    });

    // Connect, publish readings, disconnect
    if let Err(e) = simulator::session(&settings, &mut link).await {
        error!("Device session failed. Error: {}", e);
        std::process::exit(1);
    }

    info!("Done!");
}

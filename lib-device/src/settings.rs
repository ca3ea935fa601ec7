use crate::Error;
use rumqttc::QoS;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use toml;

#[derive(Debug, Deserialize, Clone)]
pub struct Mqtt {
    pub id: String,
    pub host: String,
    pub port: u16,
    pub ca_cert: String,
    pub device_cert: String,
    pub private_key: String,
}

/// Settings for the publish loop itself
#[derive(Debug, Deserialize, Clone)]
pub struct Device {
    /// Topic every reading is published to
    pub topic: String,
    /// Number of readings per run
    pub count: u32,
    /// Delay between readings in seconds
    pub interval_secs: u64,
    /// Delivery quality as the wire value (0, 1 or 2)
    pub qos: u8,
}

impl Device {
    pub fn qos(&self) -> Result<QoS, Error> {
        match self.qos {
            0 => Ok(QoS::AtMostOnce),
            1 => Ok(QoS::AtLeastOnce),
            2 => Ok(QoS::ExactlyOnce),
            q => Err(Error::CustomError(format!("Invalid qos: {}", q))),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeviceSettings {
    pub mqtt: Mqtt,
    pub device: Device,
}

impl DeviceSettings {
    pub fn new(config: String) -> Result<Self, Error> {
        // Get the path
        let path = Path::new(&config);

        // Get it as a string first
        let config = fs::read_to_string(path)?;

        // Get the actual config
        match toml::from_str(&config) {
            Ok(settings) => Ok(settings),
            Err(e) => Err(Error::CustomError(format!(
                "Unable to deserialize TOML: {}",
                e
            ))),
        }
    }
}

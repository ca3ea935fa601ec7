// Lib related
pub mod link;
pub mod mqtt;
pub mod reading;
pub mod settings;
pub mod simulator;

use std::io;

// Error
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{source}")]
    MqttClientError {
        #[from]
        source: rumqttc::ClientError,
    },

    #[error("{source}")]
    MqttConnectionError {
        #[from]
        source: rumqttc::ConnectionError,
    },

    #[error("{source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("{source}")]
    IoError {
        #[from]
        source: io::Error,
    },

    #[error("err: {0}")]
    CustomError(String),
}

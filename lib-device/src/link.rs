use crate::Error;
use async_trait::async_trait;

/// Transport seam between the publish loop and the MQTT client.
///
/// Every operation blocks until the broker side has confirmed it, so the
/// caller can stay strictly sequential.
#[async_trait]
pub trait Link {
    /// Block until the session with the broker is established.
    async fn connect(&mut self) -> Result<(), Error>;

    /// Publish one payload and block until delivery is confirmed for the
    /// session's quality of service.
    async fn publish(&mut self, topic: &str, payload: Vec<u8>) -> Result<(), Error>;

    /// Close the session.
    async fn disconnect(&mut self) -> Result<(), Error>;
}

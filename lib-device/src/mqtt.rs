// System related
use std::fs;
use std::time::Duration;

// Mqtt related
use rumqttc::{
    AsyncClient, ConnectReturnCode, Event, EventLoop, MqttOptions, Outgoing, Packet, QoS,
    TlsConfiguration, Transport,
};

// Local lib related
use crate::link::Link;
use crate::settings;
use crate::Error;
use async_trait::async_trait;

// Keep alive interval for the broker session
const KEEP_ALIVE_SECS: u64 = 6;

// Request queue depth for the underlying client
const REQUEST_CAP: usize = 10;

/// MQTT session over mutual TLS, driven inline.
///
/// The event loop is polled by each operation instead of from a separate
/// task, so `connect`, `publish` and `disconnect` only return once the
/// broker has confirmed them.
pub struct MqttLink {
    client: AsyncClient,
    eventloop: EventLoop,
    qos: QoS,
}

impl MqttLink {
    /// Build the client identity from the configured certificate, private
    /// key and root CA files. Sessions persist across reconnects.
    pub fn new(settings: &settings::Mqtt, qos: QoS) -> Result<Self, Error> {
        let mut options = MqttOptions::new(&settings.id, &settings.host, settings.port);
        options.set_keep_alive(Duration::from_secs(KEEP_ALIVE_SECS));
        options.set_clean_session(false);

        // Certificate material is read up front. A bad path fails here,
        // before any network activity.
        let ca = fs::read(&settings.ca_cert)?;
        let device_cert = fs::read(&settings.device_cert)?;
        let private_key = fs::read(&settings.private_key)?;

        options.set_transport(Transport::Tls(TlsConfiguration::Simple {
            ca,
            alpn: None,
            client_auth: Some((device_cert, private_key)),
        }));

        let (client, eventloop) = AsyncClient::new(options, REQUEST_CAP);

        Ok(Self {
            client,
            eventloop,
            qos,
        })
    }
}

#[async_trait]
impl Link for MqttLink {
    async fn connect(&mut self) -> Result<(), Error> {
        // The connection is made on first poll. Drive the event loop until
        // the broker accepts or refuses the session.
        loop {
            match self.eventloop.poll().await? {
                Event::Incoming(Packet::ConnAck(ack)) => match ack.code {
                    ConnectReturnCode::Success => return Ok(()),
                    code => {
                        return Err(Error::CustomError(format!(
                            "Connection refused: {:?}",
                            code
                        )))
                    }
                },
                _ => (),
            }
        }
    }

    async fn publish(&mut self, topic: &str, payload: Vec<u8>) -> Result<(), Error> {
        self.client
            .publish(topic, self.qos, false, payload)
            .await?;

        // Wait for the delivery handshake matching the session QoS.
        loop {
            match self.eventloop.poll().await? {
                Event::Outgoing(Outgoing::Publish(_)) if self.qos == QoS::AtMostOnce => break,
                Event::Incoming(Packet::PubAck(_)) if self.qos == QoS::AtLeastOnce => break,
                Event::Incoming(Packet::PubComp(_)) if self.qos == QoS::ExactlyOnce => break,
                _ => (),
            }
        }

        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), Error> {
        self.client.disconnect().await?;

        // The broker may drop the socket before the outgoing disconnect
        // surfaces. Either way the session is over.
        loop {
            match self.eventloop.poll().await {
                Ok(Event::Outgoing(Outgoing::Disconnect)) => break,
                Ok(_) => (),
                Err(_) => break,
            }
        }

        Ok(())
    }
}

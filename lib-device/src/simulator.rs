// System related
use log::info;
use std::time::Duration;

// Runtime
use tokio::time;

// Local lib related
use crate::link::Link;
use crate::reading::Reading;
use crate::settings::{Device, DeviceSettings};
use crate::Error;

/// One complete device session: establish the broker connection, run the
/// publish loop, then tear the session down. Any failure is terminal.
pub async fn session<L: Link>(settings: &DeviceSettings, link: &mut L) -> Result<(), Error> {
    info!(
        "Connecting to {} with client ID '{}'...",
        settings.mqtt.host, settings.mqtt.id
    );

    link.connect().await?;

    info!("Connected!");

    run(&settings.device, link).await?;

    link.disconnect().await
}

/// Publish `count` readings to the configured topic, one every
/// `interval_secs` seconds. Stops at the first error.
pub async fn run<L: Link>(settings: &Device, link: &mut L) -> Result<(), Error> {
    let mut rng = rand::thread_rng();

    info!("Begin publish");

    for i in 1..=settings.count {
        let reading = Reading::sample(&mut rng);

        // Serialize and send JSON data
        let payload = serde_json::to_string(&reading)?;
        link.publish(&settings.topic, payload.clone().into_bytes())
            .await?;

        info!(
            "Published: '{}' to the topic: '{}' ({}/{})",
            payload, settings.topic, i, settings.count
        );

        time::sleep(Duration::from_secs(settings.interval_secs)).await;
    }

    info!("Publish end");

    Ok(())
}

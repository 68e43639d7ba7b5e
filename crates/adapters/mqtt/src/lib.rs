//! # rfbridge-adapter-mqtt
//!
//! MQTT adapter — publishes canonical events to a broker as retained
//! messages, so late subscribers immediately receive the last known state.
//!
//! ## Fire-and-forget contract
//! [`MqttPublisher::accept`] only pushes the encoded message onto an
//! unbounded in-process queue and returns; a background task drains the
//! queue into the rumqttc client. A slow or disconnected broker therefore
//! never stalls the pipeline — at worst the transport drops messages, which
//! is the delivery level the bridge promises (retained/QoS handling beyond
//! that is the broker's contract).
//!
//! ## Dependency rule
//! Depends on `rfbridge-app` (sink port) and `rfbridge-domain` (event
//! types). The pipeline never sees rumqttc types.

mod config;

pub use config::MqttConfig;

use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};
use tokio::sync::mpsc;

use rfbridge_app::ports::{EventSink, SinkError};
use rfbridge_domain::event::CanonicalEvent;

/// Wait between event-loop polls after a connection error, so a dead broker
/// doesn't spin the task.
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Capacity of the rumqttc request channel between client and event loop.
const CLIENT_CHANNEL_CAPACITY: usize = 64;

/// One encoded publish, queued for the background task.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OutboundMessage {
    topic: String,
    payload: Vec<u8>,
    retain: bool,
}

impl OutboundMessage {
    /// Encode a canonical event into its topic and wire payload.
    ///
    /// Readings become JSON `{instance, tag, value, ts}`; switch events
    /// become the plain-text upper-case state token. Both are retained.
    fn encode(event: &CanonicalEvent) -> Result<Self, serde_json::Error> {
        let payload = match event {
            CanonicalEvent::Reading(reading) => serde_json::to_vec(reading)?,
            CanonicalEvent::Switch(switch) => switch.state.token().as_bytes().to_vec(),
        };
        Ok(Self {
            topic: event.topic(),
            payload,
            retain: true,
        })
    }
}

/// Broker publisher sink.
///
/// Create one with [`start`]; clones share the same outbound queue.
#[derive(Debug, Clone)]
pub struct MqttPublisher {
    tx: mpsc::UnboundedSender<OutboundMessage>,
}

impl EventSink for MqttPublisher {
    fn name(&self) -> &'static str {
        "mqtt"
    }

    fn accept(&self, event: &CanonicalEvent) -> Result<(), SinkError> {
        let message =
            OutboundMessage::encode(event).map_err(|err| SinkError::Encode(Box::new(err)))?;
        self.tx.send(message).map_err(|_| SinkError::Closed)
    }
}

/// Connect the client and spawn the publisher's background tasks.
///
/// Two tasks are started: one drains the outbound queue into the client,
/// one drives the rumqttc event loop and logs connection-state transitions.
/// Both run for the remaining process lifetime; there is no per-event
/// cancellation.
#[must_use]
pub fn start(config: &MqttConfig) -> MqttPublisher {
    let client_id = format!("{}-{}", config.client_id_prefix, uuid::Uuid::new_v4());
    let mut options = MqttOptions::new(client_id, config.host.clone(), config.port);
    options.set_keep_alive(Duration::from_secs(30));
    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        options.set_credentials(username.as_str(), password.as_str());
    }

    let (client, eventloop) = AsyncClient::new(options, CLIENT_CHANNEL_CAPACITY);
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(publish_loop(client, rx));
    tokio::spawn(connection_loop(eventloop));

    tracing::info!(host = %config.host, port = config.port, "mqtt publisher started");

    MqttPublisher { tx }
}

/// Drain the outbound queue into the client, one message at a time.
async fn publish_loop(client: AsyncClient, mut rx: mpsc::UnboundedReceiver<OutboundMessage>) {
    while let Some(message) = rx.recv().await {
        if let Err(err) = client
            .publish(message.topic, QoS::AtMostOnce, message.retain, message.payload)
            .await
        {
            tracing::warn!(%err, "mqtt publish hand-off failed");
        }
    }
    tracing::debug!("mqtt outbound queue closed, publish task stopped");
}

/// Drive the rumqttc event loop and report connection-state changes.
///
/// rumqttc reconnects on the next poll after an error; the delay only keeps
/// an unreachable broker from turning this into a busy loop.
async fn connection_loop(mut eventloop: EventLoop) {
    loop {
        match eventloop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                tracing::info!("mqtt broker connection established");
            }
            Ok(Event::Incoming(Packet::Disconnect)) => {
                tracing::warn!("mqtt broker requested disconnect");
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(%err, "mqtt connection lost");
                tokio::time::sleep(RECONNECT_DELAY).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfbridge_domain::instance::InstanceId;
    use rfbridge_domain::reading::{Reading, ReadingTag};
    use rfbridge_domain::switch::{SwitchEvent, SwitchState};
    use rfbridge_domain::time::now;

    fn reading_event() -> CanonicalEvent {
        CanonicalEvent::Reading(Reading {
            instance: InstanceId::new(51),
            tag: ReadingTag::Temperature,
            value: 21.5,
            observed_at: now(),
        })
    }

    fn switch_event() -> CanonicalEvent {
        CanonicalEvent::Switch(SwitchEvent {
            device_id: "3fa".to_string(),
            channel: 2,
            button: 1,
            state: SwitchState::On,
            observed_at: now(),
        })
    }

    #[test]
    fn should_encode_reading_as_retained_json() {
        let message = OutboundMessage::encode(&reading_event()).unwrap();
        assert_eq!(message.topic, "/sensor/51/temperature/state");
        assert!(message.retain);

        let payload: serde_json::Value = serde_json::from_slice(&message.payload).unwrap();
        assert_eq!(payload["instance"], 51);
        assert_eq!(payload["tag"], "temperature");
        assert_eq!(payload["value"], 21.5);
        assert!(payload["ts"].is_string());
    }

    #[test]
    fn should_encode_switch_as_retained_plain_text_token() {
        let message = OutboundMessage::encode(&switch_event()).unwrap();
        assert_eq!(message.topic, "/switch/intertechno/3fa/2/1/state");
        assert!(message.retain);
        assert_eq!(message.payload, b"ON");
    }

    #[test]
    fn should_queue_accepted_events_without_blocking() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let publisher = MqttPublisher { tx };

        publisher.accept(&reading_event()).unwrap();
        publisher.accept(&switch_event()).unwrap();

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert_eq!(first.topic, "/sensor/51/temperature/state");
        assert_eq!(second.payload, b"ON");
    }

    #[test]
    fn should_report_closed_sink_when_worker_is_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let publisher = MqttPublisher { tx };

        let result = publisher.accept(&reading_event());
        assert!(matches!(result, Err(SinkError::Closed)));
    }
}

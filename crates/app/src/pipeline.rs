//! The ingestion-and-dispatch pipeline.
//!
//! One strictly sequential loop: a line is decoded, classified, resolved,
//! normalized, and fanned out to every sink before the next line is read.
//! The only awaits are the wait for the next line and nothing else — sink
//! delivery is synchronous fire-and-forget per the [`EventSink`] contract.
//!
//! Error categories are contained here and never escape as process errors:
//! decode failures are logged with the offending line, unknown models are
//! logged and dropped, identity misses are informational skips. The only
//! terminal condition is the line source ending.

use std::io;
use std::sync::Arc;

use rfbridge_domain::event::CanonicalEvent;
use rfbridge_domain::record::RawRecord;
use rfbridge_domain::time::{Timestamp, now};

use crate::dispatch::ModelKind;
use crate::normalize::{normalize_sensor, normalize_switch};
use crate::ports::{EventSink, LineSource};
use crate::resolver::IdentityResolver;

/// Sequential line-to-sinks pipeline.
pub struct Pipeline {
    resolver: IdentityResolver,
    sinks: Vec<Arc<dyn EventSink>>,
}

impl Pipeline {
    /// Create a pipeline with an identity table and a set of sinks.
    #[must_use]
    pub fn new(resolver: IdentityResolver, sinks: Vec<Arc<dyn EventSink>>) -> Self {
        Self { resolver, sinks }
    }

    /// Consume the line source until it ends.
    ///
    /// Events derived from line N are delivered to every sink before line
    /// N+1 is read.
    ///
    /// # Errors
    ///
    /// Returns the IO error if reading from the source fails. A source that
    /// ends cleanly (producer exited) returns `Ok(())`.
    pub async fn run<S: LineSource + Send>(&self, mut source: S) -> io::Result<()> {
        while let Some(line) = source.next_line().await? {
            self.handle_line(&line);
        }
        tracing::info!("line source ended, pipeline stopped");
        Ok(())
    }

    /// Process one raw line end to end.
    ///
    /// The timestamp carried by every event derived from this line is
    /// assigned here, at decode time.
    pub fn handle_line(&self, line: &str) {
        let observed_at = now();
        let record = match RawRecord::decode(line) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(%err, line, "failed to decode input line");
                return;
            }
        };
        for event in self.normalize(&record, observed_at) {
            self.fan_out(&event);
        }
    }

    /// Classify and normalize one record into zero or more canonical events.
    fn normalize(&self, record: &RawRecord, observed_at: Timestamp) -> Vec<CanonicalEvent> {
        let Some(model) = record.model() else {
            tracing::debug!("record without model tag dropped");
            return Vec::new();
        };
        match ModelKind::classify(model) {
            Some(ModelKind::TempHumidity) => self.normalize_temp_humidity(record, observed_at),
            Some(ModelKind::Switch) => Self::normalize_switch_record(record, observed_at),
            None => {
                tracing::debug!(model, "unknown model, record dropped");
                Vec::new()
            }
        }
    }

    fn normalize_temp_humidity(
        &self,
        record: &RawRecord,
        observed_at: Timestamp,
    ) -> Vec<CanonicalEvent> {
        let fields = match record.sensor_fields() {
            Ok(fields) => fields,
            Err(err) => {
                tracing::warn!(%err, "failed to decode temperature/humidity record");
                return Vec::new();
            }
        };
        let Some(instance) = self.resolver.resolve(fields.id) else {
            tracing::info!(raw_id = fields.id, "no instance mapping for device id");
            return Vec::new();
        };
        normalize_sensor(&fields, instance, observed_at)
            .into_iter()
            .map(CanonicalEvent::from)
            .collect()
    }

    fn normalize_switch_record(record: &RawRecord, observed_at: Timestamp) -> Vec<CanonicalEvent> {
        let fields = match record.switch_fields() {
            Ok(fields) => fields,
            Err(err) => {
                tracing::warn!(%err, "failed to decode switch record");
                return Vec::new();
            }
        };
        match normalize_switch(&fields, observed_at) {
            Ok(event) => vec![event.into()],
            Err(err) => {
                tracing::warn!(%err, device_id = fields.id, "failed to normalize switch record");
                Vec::new()
            }
        }
    }

    /// Deliver one event to every sink, independently.
    fn fan_out(&self, event: &CanonicalEvent) {
        for sink in &self.sinks {
            if let Err(err) = sink.accept(event) {
                tracing::warn!(%err, sink = sink.name(), "sink rejected event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rfbridge_domain::instance::InstanceId;
    use rfbridge_domain::reading::ReadingTag;
    use rfbridge_domain::switch::SwitchState;

    use super::*;
    use crate::latest_cache::LatestValueCache;
    use crate::ports::SinkError;

    /// Records every accepted event for later assertions.
    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<CanonicalEvent>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<CanonicalEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl EventSink for RecordingSink {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn accept(&self, event: &CanonicalEvent) -> Result<(), SinkError> {
            self.events.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    /// Always refuses events.
    struct ClosedSink;

    impl EventSink for ClosedSink {
        fn name(&self) -> &'static str {
            "closed"
        }

        fn accept(&self, _event: &CanonicalEvent) -> Result<(), SinkError> {
            Err(SinkError::Closed)
        }
    }

    /// Feeds a fixed script of lines, then ends.
    struct ScriptedSource(std::vec::IntoIter<String>);

    impl ScriptedSource {
        fn new(lines: &[&str]) -> Self {
            Self(
                lines
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .into_iter(),
            )
        }
    }

    impl LineSource for ScriptedSource {
        async fn next_line(&mut self) -> io::Result<Option<String>> {
            Ok(self.0.next())
        }
    }

    const WT450_LINE: &str =
        r#"{"model": "WT450 sensor", "id": 167, "temperature_C": 21.5, "humidity": 40}"#;
    const SWITCH_LINE: &str = r#"{"model": "Waveman Switch Transmitter", "id": "3fa", "channel": 2, "button": 1, "state": "on"}"#;

    fn resolver() -> IdentityResolver {
        [(1, InstanceId::new(50)), (167, InstanceId::new(51))]
            .into_iter()
            .collect()
    }

    fn pipeline_with_recorder() -> (Pipeline, Arc<RecordingSink>) {
        let recorder = Arc::new(RecordingSink::default());
        let pipeline = Pipeline::new(resolver(), vec![recorder.clone()]);
        (pipeline, recorder)
    }

    #[test]
    fn should_emit_two_readings_for_mapped_sensor_record() {
        let (pipeline, recorder) = pipeline_with_recorder();

        pipeline.handle_line(WT450_LINE);

        let events = recorder.events();
        assert_eq!(events.len(), 2);
        let CanonicalEvent::Reading(t) = &events[0] else {
            panic!("expected a reading");
        };
        let CanonicalEvent::Reading(h) = &events[1] else {
            panic!("expected a reading");
        };
        assert_eq!(t.instance, InstanceId::new(51));
        assert_eq!(t.tag, ReadingTag::Temperature);
        assert!((t.value - 21.5).abs() < f64::EPSILON);
        assert_eq!(h.instance, InstanceId::new(51));
        assert_eq!(h.tag, ReadingTag::Humidity);
        assert!((h.value - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_stamp_both_readings_with_one_timestamp() {
        let (pipeline, recorder) = pipeline_with_recorder();

        pipeline.handle_line(WT450_LINE);

        let events = recorder.events();
        assert_eq!(events[0].observed_at(), events[1].observed_at());
    }

    #[test]
    fn should_emit_switch_event_without_identity_resolution() {
        // Empty identity table: switches must not consult it.
        let recorder = Arc::new(RecordingSink::default());
        let pipeline = Pipeline::new(IdentityResolver::default(), vec![recorder.clone()]);

        pipeline.handle_line(SWITCH_LINE);

        let events = recorder.events();
        assert_eq!(events.len(), 1);
        let CanonicalEvent::Switch(event) = &events[0] else {
            panic!("expected a switch event");
        };
        assert_eq!(event.device_id, "3fa");
        assert_eq!(event.state, SwitchState::On);
        assert_eq!(events[0].topic(), "/switch/intertechno/3fa/2/1/state");
    }

    #[test]
    fn should_drop_record_with_unknown_model_without_invoking_sinks() {
        let (pipeline, recorder) = pipeline_with_recorder();

        pipeline.handle_line(r#"{"model": "Acurite 609TXC", "id": 167, "temperature_C": 3.0}"#);

        assert!(recorder.events().is_empty());
    }

    #[test]
    fn should_drop_sensor_record_with_unmapped_device_id() {
        let (pipeline, recorder) = pipeline_with_recorder();

        pipeline
            .handle_line(r#"{"model": "WT450 sensor", "id": 999, "temperature_C": 1.0, "humidity": 2}"#);

        assert!(recorder.events().is_empty());
    }

    #[test]
    fn should_drop_switch_record_with_unknown_state_token() {
        let (pipeline, recorder) = pipeline_with_recorder();

        pipeline.handle_line(
            r#"{"model": "Waveman Switch Transmitter", "id": "3fa", "channel": 2, "button": 1, "state": "dim"}"#,
        );

        assert!(recorder.events().is_empty());
    }

    #[test]
    fn should_survive_malformed_line_and_process_the_next_one() {
        let (pipeline, recorder) = pipeline_with_recorder();

        pipeline.handle_line("{truncated garbage");
        pipeline.handle_line(WT450_LINE);

        assert_eq!(recorder.events().len(), 2);
    }

    #[test]
    fn should_deliver_to_remaining_sinks_when_one_fails() {
        let recorder = Arc::new(RecordingSink::default());
        let pipeline = Pipeline::new(
            resolver(),
            vec![Arc::new(ClosedSink), recorder.clone()],
        );

        pipeline.handle_line(WT450_LINE);

        assert_eq!(recorder.events().len(), 2);
    }

    #[test]
    fn should_overwrite_cache_entry_on_newer_reading() {
        let cache = Arc::new(LatestValueCache::new());
        let pipeline = Pipeline::new(resolver(), vec![cache.clone()]);

        pipeline.handle_line(WT450_LINE);
        pipeline
            .handle_line(r#"{"model": "WT450 sensor", "id": 167, "temperature_C": 22.0, "humidity": 41}"#);

        assert_eq!(cache.len(), 2);
        let stored = cache
            .lookup(InstanceId::new(51), ReadingTag::Temperature)
            .unwrap();
        assert!((stored.value - 22.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_run_source_to_completion_in_order() {
        let (pipeline, recorder) = pipeline_with_recorder();
        let source = ScriptedSource::new(&["not json", WT450_LINE, SWITCH_LINE]);

        pipeline.run(source).await.unwrap();

        let events = recorder.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], CanonicalEvent::Reading(_)));
        assert!(matches!(events[1], CanonicalEvent::Reading(_)));
        assert!(matches!(events[2], CanonicalEvent::Switch(_)));
    }
}

//! Event sink port — downstream consumers of canonical events.

use std::sync::Arc;

use rfbridge_domain::event::CanonicalEvent;

/// Why a sink could not take an event.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The sink's hand-off channel is gone (e.g. its worker task exited).
    #[error("sink is no longer accepting events")]
    Closed,

    /// The event could not be encoded into the sink's wire format.
    #[error("failed to encode event for delivery")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A downstream consumer of canonical events.
///
/// `accept` is synchronous and must not block: a sink either applies the
/// event immediately (in-memory write) or hands it off to its own worker
/// (queue push). This is what keeps the pipeline free of back-pressure from
/// slow or disconnected sinks — the hand-off is the only thing the pipeline
/// ever waits for, and it doesn't wait at all.
pub trait EventSink: Send + Sync {
    /// Short sink name used in fan-out log entries.
    fn name(&self) -> &'static str;

    /// Take ownership of a copy of the event.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the sink can no longer take events. The
    /// fan-out logs the failure and continues with the remaining sinks.
    fn accept(&self, event: &CanonicalEvent) -> Result<(), SinkError>;
}

impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn accept(&self, event: &CanonicalEvent) -> Result<(), SinkError> {
        (**self).accept(event)
    }
}

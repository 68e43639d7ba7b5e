//! In-process latest-value cache.
//!
//! Holds at most one reading per `(instance, tag)` key; a newer reading for
//! the same key overwrites the older one. The pipeline writes through the
//! [`EventSink`] impl, the HTTP query adapter reads through [`lookup`].
//!
//! [`lookup`]: LatestValueCache::lookup

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use rfbridge_domain::event::CanonicalEvent;
use rfbridge_domain::instance::InstanceId;
use rfbridge_domain::reading::{Reading, ReadingTag};

use crate::ports::{EventSink, SinkError};

/// Latest reading per `(instance, tag)` key.
///
/// The lock exists only because the HTTP task reads concurrently with the
/// single pipeline writer; each lookup observes a consistent snapshot of one
/// key, which is all the query contract needs.
#[derive(Debug, Default)]
pub struct LatestValueCache {
    inner: RwLock<HashMap<(InstanceId, ReadingTag), Reading>>,
}

impl LatestValueCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a reading, replacing any previous value for the same key.
    pub fn insert(&self, reading: Reading) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.insert((reading.instance, reading.tag), reading);
    }

    /// Return the most recent reading for the key, if any.
    #[must_use]
    pub fn lookup(&self, instance: InstanceId, tag: ReadingTag) -> Option<Reading> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.get(&(instance, tag)).cloned()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.len()
    }

    /// Whether the cache holds no readings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for LatestValueCache {
    fn name(&self) -> &'static str {
        "cache"
    }

    fn accept(&self, event: &CanonicalEvent) -> Result<(), SinkError> {
        match event {
            CanonicalEvent::Reading(reading) => self.insert(reading.clone()),
            // Switch events carry no per-instance latest value to keep.
            CanonicalEvent::Switch(_) => {}
        }
        Ok(())
    }
}

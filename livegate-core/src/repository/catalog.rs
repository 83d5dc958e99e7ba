//! Event catalog
//!
//! Read-only lookups of events, their live-stream configuration, and the
//! live-stream records attached to them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::{
    models::{Event, EventId, EventLiveStreamMeta, LiveStream, LiveStreamRecord},
    Error, Result,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait EventCatalog: Send + Sync {
    /// Live-stream configuration of an event.
    ///
    /// Fails with `EventNotFound` for unknown events and with
    /// `LiveStreamConfigMissing` for events that are not streamed.
    async fn event_live_stream_meta(&self, event_id: &EventId) -> Result<EventLiveStreamMeta>;

    /// Live-stream records of an event, in listed order.
    async fn live_streams(&self, event_id: &EventId) -> Result<Vec<LiveStream>>;
}

/// The live-stream record to play for an event: the earliest listed one.
pub async fn first_live_stream(
    catalog: &dyn EventCatalog,
    event_id: &EventId,
) -> Result<LiveStreamRecord> {
    catalog
        .live_streams(event_id)
        .await?
        .into_iter()
        .next()
        .map(LiveStreamRecord::from)
        .ok_or_else(|| Error::LiveStreamNotFound(event_id.to_string()))
}

/// Catalog contents as loaded from a seed file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub live_streams: Vec<LiveStream>,
}

/// In-memory catalog
///
/// Immutable once built; safe to share across concurrent resolutions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventCatalog {
    events: HashMap<EventId, Event>,
    live_streams: Vec<LiveStream>,
}

impl InMemoryEventCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.insert(event.id.clone(), event);
        self
    }

    #[must_use]
    pub fn with_live_stream(mut self, live_stream: LiveStream) -> Self {
        self.live_streams.push(live_stream);
        self
    }

    #[must_use]
    pub fn from_seed(seed: CatalogSeed) -> Self {
        let events = seed
            .events
            .into_iter()
            .map(|event| (event.id.clone(), event))
            .collect();

        Self {
            events,
            live_streams: seed.live_streams,
        }
    }

    /// Load a catalog from a JSON seed file
    pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let seed: CatalogSeed = serde_json::from_slice(&bytes)?;
        Ok(Self::from_seed(seed))
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn live_stream_count(&self) -> usize {
        self.live_streams.len()
    }
}

#[async_trait]
impl EventCatalog for InMemoryEventCatalog {
    async fn event_live_stream_meta(&self, event_id: &EventId) -> Result<EventLiveStreamMeta> {
        let event = self
            .events
            .get(event_id)
            .ok_or_else(|| Error::EventNotFound(event_id.to_string()))?;

        event
            .live_stream
            .clone()
            .ok_or_else(|| Error::LiveStreamConfigMissing(event_id.to_string()))
    }

    async fn live_streams(&self, event_id: &EventId) -> Result<Vec<LiveStream>> {
        Ok(self
            .live_streams
            .iter()
            .filter(|stream| &stream.event_id == event_id)
            .cloned()
            .collect())
    }
}

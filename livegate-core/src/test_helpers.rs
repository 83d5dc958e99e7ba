//! Test helpers and fixtures for livegate-core tests

use std::collections::BTreeSet;
use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

use crate::models::{Event, EventId, EventLiveStreamMeta, EventStatus, LiveStream, Patron};

/// Create a test patron
pub fn test_patron(id: &str, region: &str) -> Patron {
    Patron::new(id, region)
}

/// Create a provider-agnostic live-stream record
pub fn test_live_stream(id: &str, event_id: &str, stream_name: &str) -> LiveStream {
    LiveStream {
        id: id.to_string(),
        event_id: EventId::from(event_id),
        provider: "live_provider".to_string(),
        provider_event_id: format!("prov-{event_id}"),
        stream_name: stream_name.to_string(),
    }
}

fn region_set(regions: &[&str]) -> BTreeSet<String> {
    regions.iter().map(|r| (*r).to_string()).collect()
}

/// Test fixture builder for Event
pub struct EventFixture {
    id: EventId,
    status: EventStatus,
    geo_allow: BTreeSet<String>,
    geo_block: BTreeSet<String>,
    live_stream: bool,
}

impl EventFixture {
    pub fn new(id: &str) -> Self {
        Self {
            id: EventId::from(id),
            status: EventStatus::Live,
            geo_allow: BTreeSet::new(),
            geo_block: BTreeSet::new(),
            live_stream: true,
        }
    }

    pub fn with_geo_allow(mut self, regions: &[&str]) -> Self {
        self.geo_allow = region_set(regions);
        self
    }

    pub fn with_geo_block(mut self, regions: &[&str]) -> Self {
        self.geo_block = region_set(regions);
        self
    }

    pub fn without_live_stream(mut self) -> Self {
        self.live_stream = false;
        self
    }

    pub fn meta(&self) -> EventLiveStreamMeta {
        EventLiveStreamMeta {
            event_id: self.id.clone(),
            provider_event_id: format!("prov-{}", self.id),
            status: self.status,
            geo_allow: self.geo_allow.clone(),
            geo_block: self.geo_block.clone(),
        }
    }

    pub fn build(self) -> Event {
        let live_stream = self.live_stream.then(|| self.meta());
        Event {
            id: self.id,
            name: "Test Event".to_string(),
            live_stream,
        }
    }
}

/// In-memory log sink for asserting on emitted log lines
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route this thread's logs into the capture until the guard drops
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

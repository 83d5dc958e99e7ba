use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use super::id::EventId;

/// Live-stream status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Scheduled,
    Live,
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "live" => Ok(Self::Live),
            _ => Err(format!("Unknown event status: {s}")),
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scheduled => write!(f, "scheduled"),
            Self::Live => write!(f, "live"),
        }
    }
}

/// Live-stream configuration of an event
///
/// An empty `geo_allow` means no explicit allow restriction; an empty
/// `geo_block` means nothing is blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLiveStreamMeta {
    pub event_id: EventId,
    pub provider_event_id: String,
    pub status: EventStatus,
    #[serde(default)]
    pub geo_allow: BTreeSet<String>,
    #[serde(default)]
    pub geo_block: BTreeSet<String>,
}

/// Catalog event
///
/// `live_stream` is `None` for events that exist but are not streamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub live_stream: Option<EventLiveStreamMeta>,
}

/// Provider-agnostic live-stream record as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStream {
    pub id: String,
    pub event_id: EventId,
    /// Provider type name (e.g., "`live_provider`")
    #[serde(default)]
    pub provider: String,
    pub provider_event_id: String,
    pub stream_name: String,
}

/// Live-stream record in the shape the provider client needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStreamRecord {
    pub provider_event_id: String,
    pub stream_name: String,
}

impl From<&LiveStream> for LiveStreamRecord {
    fn from(stream: &LiveStream) -> Self {
        Self {
            provider_event_id: stream.provider_event_id.clone(),
            stream_name: stream.stream_name.clone(),
        }
    }
}

impl From<LiveStream> for LiveStreamRecord {
    fn from(stream: LiveStream) -> Self {
        Self {
            provider_event_id: stream.provider_event_id,
            stream_name: stream.stream_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_status_parse() {
        assert_eq!("live".parse::<EventStatus>(), Ok(EventStatus::Live));
        assert_eq!("Scheduled".parse::<EventStatus>(), Ok(EventStatus::Scheduled));
        assert!("finished".parse::<EventStatus>().is_err());
        assert_eq!(EventStatus::Live.to_string(), "live");
    }

    #[test]
    fn test_live_stream_record_conversion() {
        let stream = LiveStream {
            id: "ls-1".to_string(),
            event_id: EventId::from("ev-1"),
            provider: "live_provider".to_string(),
            provider_event_id: "prov-1".to_string(),
            stream_name: "main".to_string(),
        };

        let record = LiveStreamRecord::from(&stream);
        assert_eq!(record.provider_event_id, "prov-1");
        assert_eq!(record.stream_name, "main");
    }

    #[test]
    fn test_meta_geo_lists_default_empty() {
        let meta: EventLiveStreamMeta = serde_json::from_value(serde_json::json!({
            "event_id": "ev-1",
            "provider_event_id": "prov-1",
            "status": "scheduled",
        }))
        .unwrap();

        assert!(meta.geo_allow.is_empty());
        assert!(meta.geo_block.is_empty());
        assert_eq!(meta.status, EventStatus::Scheduled);
    }
}

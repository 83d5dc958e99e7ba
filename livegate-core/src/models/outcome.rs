//! Resolution outcomes
//!
//! A resolution always ends in exactly one `ResolutionOutcome`, wrapped in a
//! `LiveStreamResult` that echoes the requested event id.

use livegate_providers::{PlayerLink, StreamLink};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::event::LiveStreamRecord;
use super::id::EventId;

/// Why a patron may not watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionReason {
    OutOfRegion,
}

/// Geo restriction, carrying the rules that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatronRestriction {
    pub reason: RestrictionReason,
    pub event_id: EventId,
    pub geo_allow: BTreeSet<String>,
    pub geo_block: BTreeSet<String>,
}

impl PatronRestriction {
    #[must_use]
    pub fn out_of_region(
        event_id: EventId,
        geo_allow: BTreeSet<String>,
        geo_block: BTreeSet<String>,
    ) -> Self {
        Self {
            reason: RestrictionReason::OutOfRegion,
            event_id,
            geo_allow,
            geo_block,
        }
    }
}

/// Provider-side denial reasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    EventPending,
    EventClosed,
    EventCancelled,
    RateLimited,
    Error,
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventPending => write!(f, "event_pending"),
            Self::EventClosed => write!(f, "event_closed"),
            Self::EventCancelled => write!(f, "event_cancelled"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Playable stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLinkResult {
    pub stream: LiveStreamRecord,
    pub stream_link: StreamLink,
    pub player_link: PlayerLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    PlayerLink(PlayerLinkResult),
    PatronRestriction(PatronRestriction),
    ProviderDenial { reason: DenialReason },
    /// Internal failure; the cause only appears in the logs
    ResolutionError,
}

impl ResolutionOutcome {
    /// Outcome name as used in logs and JSON
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PlayerLink(_) => "player_link",
            Self::PatronRestriction(_) => "patron_restriction",
            Self::ProviderDenial { .. } => "provider_denial",
            Self::ResolutionError => "resolution_error",
        }
    }
}

/// Envelope returned by the resolution pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStreamResult {
    pub event_id: EventId,
    pub outcome: ResolutionOutcome,
}

impl LiveStreamResult {
    #[must_use]
    pub const fn new(event_id: EventId, outcome: ResolutionOutcome) -> Self {
        Self { event_id, outcome }
    }
}

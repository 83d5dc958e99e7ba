//! Live-stream provider interface
//!
//! Seam between the resolution pipeline and the provider transport. The HTTP
//! client implements it; tests substitute their own implementations.

use super::{
    error::LiveStreamError,
    types::{PlayerLink, PlayerLinkRequest, StreamLink, StreamLinkRequest},
};
use async_trait::async_trait;

#[async_trait]
pub trait LiveStreamProvider: Send + Sync {
    /// Obtain a signed stream link for an event stream.
    async fn stream_link(&self, request: &StreamLinkRequest) -> Result<StreamLink, LiveStreamError>;

    /// Exchange a signed stream link for a player link.
    async fn player_link(&self, request: &PlayerLinkRequest) -> Result<PlayerLink, LiveStreamError>;
}

// Livegate Provider Clients
//
// Pure HTTP client for the external live-streaming provider. The client knows
// nothing about events, patrons or geo rules; livegate-core composes it into
// the resolution pipeline through the `LiveStreamProvider` trait.

pub mod live;

// Re-export client types for convenience
pub use live::error::LiveStreamError;
pub use live::{
    BaseUrls, LiveStreamClient, LiveStreamProvider, PlayerLink, PlayerLinkRequest, StreamLink,
    StreamLinkRequest,
};

// Status type carried by `LiveStreamError::Provider`
pub use reqwest::StatusCode;

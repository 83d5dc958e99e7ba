//! Live-stream Provider Client
//!
//! HTTP client for the external live-streaming provider. Playback is a two
//! step exchange: a signed stream link is requested for an event stream and
//! then traded for a player link the patron's device can open.
//!
//! # Example
//!
//! ```no_run
//! use livegate_providers::live::{BaseUrls, LiveStreamClient, LiveStreamProvider, StreamLinkRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LiveStreamClient::new(BaseUrls::new("https://provider.example.com"))?;
//! let link = client
//!     .stream_link(&StreamLinkRequest {
//!         event_id: "ev-100".to_string(),
//!         stream_name: "main".to_string(),
//!         user_id: "patron-1".to_string(),
//!         ip_address: "203.0.113.7".to_string(),
//!         customer_id: "cust-1".to_string(),
//!         home_page_url: "https://brand.example.com".to_string(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod error;
pub mod service;
pub mod types;

pub use client::{BaseUrls, LiveStreamClient};
pub use error::LiveStreamError;
pub use service::LiveStreamProvider;
pub use types::*;

use livegate_providers::LiveStreamError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Event has no live-stream configuration: {0}")]
    LiveStreamConfigMissing(String),

    #[error("No live stream for event: {0}")]
    LiveStreamNotFound(String),

    #[error("Unsupported deployment brand: {0}")]
    UnsupportedDeployment(String),

    #[error("Provider error: {0}")]
    Provider(#[from] LiveStreamError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short machine-readable cause used as a log field
    #[must_use]
    pub const fn cause(&self) -> &'static str {
        match self {
            Self::EventNotFound(_) => "event_not_found",
            Self::LiveStreamConfigMissing(_) => "live_stream_config_missing",
            Self::LiveStreamNotFound(_) => "live_stream_not_found",
            Self::UnsupportedDeployment(_) => "unsupported_deployment",
            Self::Provider(_) => "provider_transport",
            Self::Serialization(_) => "serialization",
            Self::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

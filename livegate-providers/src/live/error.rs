//! Live-stream provider client error types

use thiserror::Error;

use super::types::ProviderErrorBody;

/// Maximum response body size for provider HTTP calls (16 MB).
pub const MAX_RESPONSE_SIZE: usize = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum LiveStreamError {
    /// The provider answered with a non-2xx status.
    #[error("Provider error {status} (operation code {op_code:?}): {message}")]
    Provider {
        status: reqwest::StatusCode,
        op_code: Option<u32>,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Response too large ({size} bytes, max {MAX_RESPONSE_SIZE})")]
    ResponseTooLarge { size: u64 },
}

/// Read a response body with size limit.
async fn bytes_with_limit(response: reqwest::Response) -> Result<Vec<u8>, LiveStreamError> {
    if let Some(cl) = response.content_length() {
        if usize::try_from(cl).map_or(true, |n| n > MAX_RESPONSE_SIZE) {
            return Err(LiveStreamError::ResponseTooLarge { size: cl });
        }
    }
    let bytes = response.bytes().await?;
    if bytes.len() > MAX_RESPONSE_SIZE {
        return Err(LiveStreamError::ResponseTooLarge { size: bytes.len() as u64 });
    }
    Ok(bytes.to_vec())
}

/// Read a response body with size limit and deserialize as JSON.
pub async fn json_with_limit<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, LiveStreamError> {
    let bytes = bytes_with_limit(response).await?;
    serde_json::from_slice(&bytes).map_err(Into::into)
}

/// Check HTTP response status before processing body.
///
/// Non-2xx responses always become `LiveStreamError::Provider`, even when the
/// body cannot be read. The provider's JSON error body supplies the message
/// and operation code; any other body is kept verbatim as the message.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LiveStreamError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let (message, op_code) = match bytes_with_limit(resp).await {
        Ok(bytes) => match serde_json::from_slice::<ProviderErrorBody>(&bytes) {
            Ok(body) => (body.message, body.operation_code),
            Err(_) => (String::from_utf8_lossy(&bytes).into_owned(), None),
        },
        Err(e) => (format!("unreadable error body: {e}"), None),
    };

    Err(LiveStreamError::Provider {
        status,
        op_code,
        message,
    })
}

impl From<reqwest::Error> for LiveStreamError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for LiveStreamError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for LiveStreamError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

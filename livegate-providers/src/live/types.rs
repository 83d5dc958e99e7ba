//! Live-stream provider HTTP API types
//!
//! Request and response bodies exchanged with the provider. Field names follow
//! the provider's camelCase JSON.

use serde::{Deserialize, Serialize};

/// Request for a signed stream link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamLinkRequest {
    /// Provider-side event identifier
    pub event_id: String,
    pub stream_name: String,
    /// Patron the link is issued to
    pub user_id: String,
    pub ip_address: String,
    pub customer_id: String,
    pub home_page_url: String,
}

/// Signed stream link returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamLink {
    pub link: String,
    /// Unix timestamp (seconds) after which the link is rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

/// Request exchanging a stream link for a player link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLinkRequest {
    pub stream_link: String,
    pub ip_address: String,
    pub customer_id: String,
    pub home_page_url: String,
}

/// Player link returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLink {
    pub player_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_code: Option<String>,
}

/// Error body sent with non-2xx responses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProviderErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub operation_code: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_link_request_uses_camel_case() {
        let req = StreamLinkRequest {
            event_id: "ev-1".to_string(),
            stream_name: "main".to_string(),
            user_id: "p-1".to_string(),
            ip_address: "198.51.100.4".to_string(),
            customer_id: "c-1".to_string(),
            home_page_url: "https://brand.example.com".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["eventId"], "ev-1");
        assert_eq!(json["streamName"], "main");
        assert_eq!(json["ipAddress"], "198.51.100.4");
        assert_eq!(json["homePageUrl"], "https://brand.example.com");
    }

    #[test]
    fn test_stream_link_without_expiry() {
        let link: StreamLink = serde_json::from_str(r#"{"link":"https://cdn/x"}"#).unwrap();
        assert_eq!(link.link, "https://cdn/x");
        assert!(link.expires_at.is_none());
    }

    #[test]
    fn test_error_body_defaults() {
        let body: ProviderErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_empty());
        assert!(body.operation_code.is_none());

        let body: ProviderErrorBody =
            serde_json::from_str(r#"{"message":"blocked","operationCode":306}"#).unwrap();
        assert_eq!(body.message, "blocked");
        assert_eq!(body.operation_code, Some(306));
    }
}

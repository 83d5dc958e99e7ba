//! Live-stream resolution endpoint
//!
//! Resolution always answers `200` with a tagged outcome; restrictions,
//! provider denials and failures are data, not HTTP errors. Only a malformed
//! request is rejected.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use livegate_core::models::{EventId, LiveStreamResult, Patron};
use serde::Deserialize;

use super::{AppError, AppResult, AppState, ClientIp};

/// Live-stream routes
pub fn create_live_stream_router() -> Router<AppState> {
    Router::new().route("/api/events/{event_id}/live-stream", get(resolve_live_stream))
}

/// Patron attributes supplied by the caller
#[derive(Debug, Default, Deserialize)]
pub struct LiveStreamQuery {
    pub patron_id: Option<String>,
    pub region: Option<String>,
}

fn required(value: Option<String>, name: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::bad_request(format!("{name} is required")))
}

impl LiveStreamQuery {
    fn into_patron(self) -> AppResult<Patron> {
        let patron_id = required(self.patron_id, "patron_id")?;
        let region = required(self.region, "region")?;
        Ok(Patron::new(patron_id, region))
    }
}

/// Resolve a playable link for the event on behalf of the patron
pub async fn resolve_live_stream(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Query(query): Query<LiveStreamQuery>,
    ClientIp(client_ip): ClientIp,
) -> AppResult<Json<LiveStreamResult>> {
    let patron = query.into_patron()?;
    let event_id = EventId::from(event_id);

    let result = state
        .live_stream_service
        .resolve(&event_id, &patron, client_ip)
        .await;

    Ok(Json(result))
}

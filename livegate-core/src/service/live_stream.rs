//! Live-stream resolution
//!
//! Decides whether a patron may watch an event's live stream and, if so,
//! obtains the player link from the provider. Steps run strictly in order and
//! the first failing step decides the outcome:
//!
//! 1. event live-stream configuration from the catalog
//! 2. patron geo eligibility against the event's allow/block lists
//! 3. the event's live-stream record
//! 4. deployment identity (customer id, home page URL)
//! 5. provider stream link, then player link
//!
//! `resolve` never fails: every error ends in one `ResolutionOutcome`.

use std::net::IpAddr;
use std::sync::Arc;

use livegate_providers::{LiveStreamError, LiveStreamProvider, PlayerLinkRequest, StreamLinkRequest};
use tracing::{debug, error, info, warn};

use super::eligibility::check_eligibility;
use super::identity::AppIdentity;
use crate::{
    models::{
        DenialReason, EventId, EventLiveStreamMeta, LiveStreamResult, Patron, PatronRestriction,
        PlayerLinkResult, ResolutionOutcome,
    },
    repository::{first_live_stream, EventCatalog},
    Error,
};

/// Provider operation code: viewer outside the licensed territory
pub const OP_CODE_OUT_OF_REGION: u32 = 306;
/// Provider operation code: event has not started
pub const OP_CODE_EVENT_PENDING: u32 = 402;
/// Provider operation code: event is over
pub const OP_CODE_EVENT_CLOSED: u32 = 403;
/// Provider operation code: event was cancelled
pub const OP_CODE_EVENT_CANCELLED: u32 = 404;

const HTTP_TOO_MANY_REQUESTS: u16 = 429;

/// Map a provider error to an outcome. Operation codes are checked before the
/// HTTP status.
///
/// Code 306 is reported with the event's configured geo lists, whatever the
/// provider's own reason for the block was.
#[must_use]
pub fn classify_provider_error(
    status: u16,
    op_code: Option<u32>,
    event_id: &EventId,
    meta: &EventLiveStreamMeta,
) -> ResolutionOutcome {
    let denial = |reason| ResolutionOutcome::ProviderDenial { reason };

    match (op_code, status) {
        (Some(OP_CODE_OUT_OF_REGION), _) => {
            ResolutionOutcome::PatronRestriction(PatronRestriction::out_of_region(
                event_id.clone(),
                meta.geo_allow.clone(),
                meta.geo_block.clone(),
            ))
        }
        (Some(OP_CODE_EVENT_PENDING), _) => denial(DenialReason::EventPending),
        (Some(OP_CODE_EVENT_CLOSED), _) => denial(DenialReason::EventClosed),
        (Some(OP_CODE_EVENT_CANCELLED), _) => denial(DenialReason::EventCancelled),
        (_, HTTP_TOO_MANY_REQUESTS) => denial(DenialReason::RateLimited),
        _ => denial(DenialReason::Error),
    }
}

/// Why a resolution stopped early
enum Halt {
    /// Expected outcome, already logged where it was decided
    Outcome(ResolutionOutcome),
    /// Internal failure, logged once by `resolve`
    Failed(Error),
}

impl From<Error> for Halt {
    fn from(err: Error) -> Self {
        Self::Failed(err)
    }
}

impl From<PatronRestriction> for Halt {
    fn from(restriction: PatronRestriction) -> Self {
        Self::Outcome(ResolutionOutcome::PatronRestriction(restriction))
    }
}

/// Live-stream resolution service
///
/// Holds only read-only collaborators; one instance serves concurrent requests.
pub struct LiveStreamService {
    catalog: Arc<dyn EventCatalog>,
    provider: Arc<dyn LiveStreamProvider>,
    identity: AppIdentity,
    jurisdiction: String,
}

impl LiveStreamService {
    pub fn new(
        catalog: Arc<dyn EventCatalog>,
        provider: Arc<dyn LiveStreamProvider>,
        identity: AppIdentity,
        jurisdiction: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            provider,
            identity,
            jurisdiction: jurisdiction.into(),
        }
    }

    /// Resolve playback of `event_id` for `patron` connecting from `client_ip`.
    pub async fn resolve(
        &self,
        event_id: &EventId,
        patron: &Patron,
        client_ip: IpAddr,
    ) -> LiveStreamResult {
        let outcome = match self.try_resolve(event_id, patron, client_ip).await {
            Ok(player_link) => ResolutionOutcome::PlayerLink(player_link),
            Err(Halt::Outcome(outcome)) => outcome,
            Err(Halt::Failed(err)) => {
                error!(
                    event_id = %event_id,
                    patron_id = %patron.patron_id,
                    cause = err.cause(),
                    error = %err,
                    "Live stream resolution failed"
                );
                ResolutionOutcome::ResolutionError
            }
        };

        debug!(event_id = %event_id, outcome = outcome.kind(), "Live stream resolved");
        LiveStreamResult::new(event_id.clone(), outcome)
    }

    async fn try_resolve(
        &self,
        event_id: &EventId,
        patron: &Patron,
        client_ip: IpAddr,
    ) -> Result<PlayerLinkResult, Halt> {
        let meta = self.catalog.event_live_stream_meta(event_id).await?;

        check_eligibility(patron, &meta.geo_allow, &meta.geo_block, event_id).inspect_err(|_| {
            info!(
                event_id = %event_id,
                patron_id = %patron.patron_id,
                region = %patron.region,
                "Patron outside event regions"
            );
        })?;

        let stream = first_live_stream(self.catalog.as_ref(), event_id).await?;

        let customer_id = self.identity.customer_id()?;
        let home_page_url = self.identity.home_page_url()?;
        let ip_address = client_ip.to_string();

        let stream_link_request = StreamLinkRequest {
            event_id: stream.provider_event_id.clone(),
            stream_name: stream.stream_name.clone(),
            user_id: patron.patron_id.to_string(),
            ip_address: ip_address.clone(),
            customer_id: customer_id.to_string(),
            home_page_url: home_page_url.to_string(),
        };
        let stream_link = self
            .provider
            .stream_link(&stream_link_request)
            .await
            .map_err(|e| self.provider_failure(e, event_id, &meta, &stream.provider_event_id, &ip_address))?;

        let player_link_request = PlayerLinkRequest {
            stream_link: stream_link.link.clone(),
            ip_address: ip_address.clone(),
            customer_id: customer_id.to_string(),
            home_page_url: home_page_url.to_string(),
        };
        let player_link = self
            .provider
            .player_link(&player_link_request)
            .await
            .map_err(|e| self.provider_failure(e, event_id, &meta, &stream.provider_event_id, &ip_address))?;

        Ok(PlayerLinkResult {
            stream,
            stream_link,
            player_link,
        })
    }

    fn provider_failure(
        &self,
        err: LiveStreamError,
        event_id: &EventId,
        meta: &EventLiveStreamMeta,
        provider_event_id: &str,
        client_ip: &str,
    ) -> Halt {
        match err {
            LiveStreamError::Provider {
                status,
                op_code,
                message,
            } => {
                warn!(
                    status = status.as_u16(),
                    provider_message = %message,
                    op_code = ?op_code,
                    client_ip = %client_ip,
                    provider_event_id = %provider_event_id,
                    jurisdiction = %self.jurisdiction,
                    "Live stream provider returned an error"
                );
                Halt::Outcome(classify_provider_error(status.as_u16(), op_code, event_id, meta))
            }
            transport => {
                warn!(
                    client_ip = %client_ip,
                    provider_event_id = %provider_event_id,
                    jurisdiction = %self.jurisdiction,
                    error = %transport,
                    "Live stream provider request failed"
                );
                Halt::Failed(Error::Provider(transport))
            }
        }
    }
}

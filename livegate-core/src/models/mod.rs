pub mod event;
pub mod id;
pub mod outcome;
pub mod patron;

pub use event::{Event, EventLiveStreamMeta, EventStatus, LiveStream, LiveStreamRecord};
pub use id::{EventId, PatronId};
pub use outcome::{
    DenialReason, LiveStreamResult, PatronRestriction, PlayerLinkResult, ResolutionOutcome,
    RestrictionReason,
};
pub use patron::Patron;

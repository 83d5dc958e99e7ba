pub mod eligibility;
pub mod identity;
pub mod live_stream;

pub use eligibility::check_eligibility;
pub use identity::{AppIdentity, Brand};
pub use live_stream::{classify_provider_error, LiveStreamService};

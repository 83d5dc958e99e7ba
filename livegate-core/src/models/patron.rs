use serde::{Deserialize, Serialize};

use super::id::PatronId;

/// Patron requesting stream access
///
/// Region is resolved upstream (e.g. from geolocation) and supplied by the
/// caller together with the client IP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    pub patron_id: PatronId,
    /// Region code, e.g. "US-NJ"
    pub region: String,
}

impl Patron {
    pub fn new(patron_id: impl Into<PatronId>, region: impl Into<String>) -> Self {
        Self {
            patron_id: patron_id.into(),
            region: region.into(),
        }
    }
}

//! Patron geo eligibility
//!
//! Block list first, then allow list. An empty allow list allows every region
//! that is not blocked.

use std::collections::BTreeSet;

use crate::models::{EventId, Patron, PatronRestriction};

/// Decide whether `patron` may watch the event under the given geo rules.
pub fn check_eligibility(
    patron: &Patron,
    geo_allow: &BTreeSet<String>,
    geo_block: &BTreeSet<String>,
    event_id: &EventId,
) -> Result<(), PatronRestriction> {
    let blocked = !geo_block.is_empty() && geo_block.contains(&patron.region);
    let not_allowed = !geo_allow.is_empty() && !geo_allow.contains(&patron.region);

    if blocked || not_allowed {
        return Err(PatronRestriction::out_of_region(
            event_id.clone(),
            geo_allow.clone(),
            geo_block.clone(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RestrictionReason;
    use crate::test_helpers::test_patron;

    fn regions(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|r| (*r).to_string()).collect()
    }

    #[test]
    fn test_no_rules_always_eligible() {
        let event_id = EventId::from("ev-1");
        for region in ["US-NY", "US-CA", "CA-ON", ""] {
            let patron = test_patron("p-1", region);
            assert!(check_eligibility(&patron, &BTreeSet::new(), &BTreeSet::new(), &event_id).is_ok());
        }
    }

    #[test]
    fn test_blocked_region_restricted() {
        let patron = test_patron("p-1", "US-NY");
        let block = regions(&["US-NY"]);

        let restriction =
            check_eligibility(&patron, &BTreeSet::new(), &block, &EventId::from("ev-1")).unwrap_err();

        assert_eq!(restriction.reason, RestrictionReason::OutOfRegion);
        assert_eq!(restriction.event_id.as_str(), "ev-1");
        assert_eq!(restriction.geo_block, block);
        assert!(restriction.geo_allow.is_empty());
    }

    #[test]
    fn test_block_takes_precedence_over_allow() {
        let patron = test_patron("p-1", "US-NY");
        let allow = regions(&["US-NY", "US-NJ"]);
        let block = regions(&["US-NY"]);

        let restriction =
            check_eligibility(&patron, &allow, &block, &EventId::from("ev-1")).unwrap_err();

        assert_eq!(restriction.reason, RestrictionReason::OutOfRegion);
        assert_eq!(restriction.geo_allow, allow);
        assert_eq!(restriction.geo_block, block);
    }

    #[test]
    fn test_region_outside_allow_list_restricted() {
        let patron = test_patron("p-1", "US-NY");
        let allow = regions(&["US-CA"]);

        let result = check_eligibility(&patron, &allow, &BTreeSet::new(), &EventId::from("ev-1"));
        assert!(result.is_err());
    }

    #[test]
    fn test_region_in_allow_list_eligible() {
        let patron = test_patron("p-1", "US-CA");
        let allow = regions(&["US-CA", "US-NV"]);
        let block = regions(&["US-NY"]);

        assert!(check_eligibility(&patron, &allow, &block, &EventId::from("ev-1")).is_ok());
    }

    #[test]
    fn test_unblocked_region_eligible_without_allow_list() {
        let patron = test_patron("p-1", "US-PA");
        let block = regions(&["US-NY"]);

        assert!(check_eligibility(&patron, &BTreeSet::new(), &block, &EventId::from("ev-1")).is_ok());
    }
}

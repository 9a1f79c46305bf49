//! Opaque id generation for new records.
//!
//! Ids only need birthday-bound uniqueness within one collection; a random
//! UUID clears that bar with no coordination. The rest of the crate treats
//! ids as opaque strings, so collections hydrated from storage may carry ids
//! minted by other schemes.

use uuid::Uuid;

pub fn generate() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_distinct_ids() {
        let ids: HashSet<String> = (0..1000).map(|_| generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn ids_are_non_empty_strings() {
        assert!(!generate().is_empty());
    }
}

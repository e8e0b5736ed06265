// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>

use serde::{Deserialize, Serialize};

/// The most copies of a single card a deck is allowed to run.
pub const PLAYSET_LIMIT: u32 = 4;

/// One card code together with how many copies the deck runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub code: String,
    pub quantity: u32,
}

impl CardEntry {
    pub fn new(code: &str, quantity: u32) -> Self {
        Self {
            code: code.to_string(),
            quantity,
        }
    }
}

/// Merge entries that share a code, keeping first appearance order and
/// capping every quantity at [`PLAYSET_LIMIT`].
pub fn consolidate(entries: Vec<CardEntry>) -> Vec<CardEntry> {
    let mut consolidated: Vec<CardEntry> = vec![];
    for entry in entries {
        match consolidated
            .iter_mut()
            .find(|existing| existing.code == entry.code)
        {
            Some(existing) => {
                existing.quantity = (existing.quantity + entry.quantity).min(PLAYSET_LIMIT)
            }
            None => consolidated.push(CardEntry {
                quantity: entry.quantity.min(PLAYSET_LIMIT),
                ..entry
            }),
        }
    }
    consolidated
}

#[cfg(test)]
mod entry_tests {
    use super::*;

    #[test]
    fn duplicates_merge_in_first_seen_order() {
        let entries = vec![
            CardEntry::new("OP01-001", 2),
            CardEntry::new("OP01-016", 1),
            CardEntry::new("OP01-001", 1),
        ];
        assert_eq!(
            consolidate(entries),
            vec![CardEntry::new("OP01-001", 3), CardEntry::new("OP01-016", 1)]
        );
    }

    #[test]
    fn quantities_cap_at_a_playset() {
        let entries = vec![CardEntry::new("OP01-001", 3), CardEntry::new("OP01-001", 3)];
        assert_eq!(consolidate(entries), vec![CardEntry::new("OP01-001", 4)]);
        assert_eq!(
            consolidate(vec![CardEntry::new("OP01-001", 9)]),
            vec![CardEntry::new("OP01-001", 4)]
        );
    }

    #[test]
    fn empty_input_consolidates_to_nothing() {
        assert_eq!(consolidate(vec![]), vec![]);
    }
}

//! Merging and ordering of candidate hits.

use super::query::SearchHit;
use crate::catalog::IconName;
use ahash::AHashMap;
use std::collections::hash_map::Entry;

/// Collapse hits to one per icon and order them.
///
/// For duplicate icons the hit with the highest relevance survives, ties going
/// to the higher-priority match type. Output is sorted by relevance descending,
/// then by icon name ascending.
pub fn rank(hits: impl IntoIterator<Item = SearchHit>) -> Vec<SearchHit> {
    let mut best: AHashMap<IconName, SearchHit> = AHashMap::new();

    for hit in hits {
        match best.entry(hit.name.clone()) {
            Entry::Occupied(mut slot) => {
                if hit.outranks(slot.get()) {
                    slot.insert(hit);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(hit);
            }
        }
    }

    let mut ranked: Vec<SearchHit> = best.into_iter().map(|(_, hit)| hit).collect();
    ranked.sort_unstable_by(|a, b| {
        b.relevance
            .cmp(&a.relevance)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked
}

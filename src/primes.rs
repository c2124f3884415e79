// src/primes.rs
// Group relic rewards into primes, in one pass over the relics.

use std::collections::HashMap;

use crate::model::{Container, Part, ProducedItem};

/// Grouping key for a reward name, or `None` if it isn't a prime part.
///
/// The name is cut at the first `marker` and the marker re-appended, so
/// "Volt Prime Systems Blueprint" and "Volt Prime Chassis" share "Volt Prime".
/// Names carrying `exclusion` never group.
pub fn prime_key(item: &str, marker: &str, exclusion: &str) -> Option<String> {
    if marker.is_empty() || (!exclusion.is_empty() && item.contains(exclusion)) {
        return None;
    }
    let at = item.find(marker)?;
    let head = item[..at].trim_end();
    if head.is_empty() {
        return Some(marker.to_string());
    }
    Some(format!("{head} {marker}"))
}

/// Primes in first-seen order; parts in scan order across relics.
pub fn group(relics: &[Container], marker: &str, exclusion: &str) -> Vec<ProducedItem> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<ProducedItem> = Vec::new();

    for relic in relics {
        for reward in &relic.rewards {
            let Some(key) = prime_key(&reward.item, marker, exclusion) else {
                continue;
            };
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                out.push(ProducedItem::new(key));
                out.len() - 1
            });
            out[slot].parts.push(Part {
                part: reward.item.clone(),
                rarity: reward.rarity,
                container: relic.name.clone(),
            });
        }
    }

    logf!(primes = out.len(), relics = relics.len(), "grouped prime parts");
    out
}

// src/specs/relics.rs
//! Scraping *spec* for relic reward tables.
//!
//! Responsibilities:
//! - Decide which relics exist (sub-table titles, or heading discovery).
//! - Read each relic's `(item, chance)` rows and classify the chance.
//! - Attach the tier's location from the caller's lookup table.
//!
//! Non-Responsibilities:
//! - **No fetching** (the runner hands in the parsed page).
//! - **No grouping or formatting.**

use std::collections::HashSet;

use crate::config::{ExtractOptions, RarityRule};
use crate::core::html::TableDoc;
use crate::model::{Container, Rarity, RewardEntry};

/// First rule whose token is contained in `chance` wins; no match → `Unknown`.
pub fn classify_rarity(chance: &str, rules: &[RarityRule]) -> Rarity {
    rules
        .iter()
        .find(|rule| chance.contains(rule.token.as_str()))
        .map(|rule| rule.rarity)
        .unwrap_or(Rarity::Unknown)
}

/// Relic names to look up, in page order, without repeats.
pub fn relic_names(doc: &TableDoc, opts: &ExtractOptions) -> Vec<String> {
    let suffix = opts.item_heading_suffix.as_str();

    let raw: Vec<String> = if opts.sub_table_titles.is_empty() {
        let found = doc.headings_ending_with(suffix);
        logd!(count = found.len(), suffix, "discovered relic headings");
        found
    } else {
        opts.sub_table_titles
            .iter()
            .flat_map(|title| doc.locate_subtable(title))
            .collect()
    };

    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(raw.len());
    for name in raw {
        let name = strip_suffix(&name, suffix).to_string();
        if seen.insert(name.clone()) {
            names.push(name);
        } else {
            logd!(relic = %name, "relic listed more than once; keeping first");
        }
    }
    names
}

/// One container per relic name; relics whose table is missing keep an empty reward list.
pub fn extract(doc: &TableDoc, opts: &ExtractOptions) -> Vec<Container> {
    relic_names(doc, opts)
        .into_iter()
        .map(|name| {
            let heading = format!("{name}{}", opts.item_heading_suffix);
            let rewards = doc
                .locate_item_rows(&heading)
                .into_iter()
                .map(|(item, chance)| {
                    let rarity = classify_rarity(&chance, &opts.rarity_rules);
                    if !rarity.is_known() {
                        logd!(relic = %name, item = %item, chance = %chance, "unrecognised drop chance");
                    }
                    RewardEntry::new(item, rarity).with_source(chance)
                })
                .collect();

            let mut relic = Container::new(name);
            relic.location = opts.location_for(relic.tier()).to_string();
            relic.rewards = rewards;
            relic
        })
        .collect()
}

fn strip_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() {
        return name;
    }
    name.strip_suffix(suffix).unwrap_or(name).trim_end()
}

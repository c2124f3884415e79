// src/model.rs
//
// Canonical records shared by both pipelines.
//
// - Container:    a relic; unique by name, rewards in source-table order.
// - ProducedItem: a prime; parts grouped from rewards across all relics.
// - Dataset:      what the extractor writes and the renderer reads back.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl Rarity {
    /// Label as written in markdown and shown on the page. Empty for `Unknown`.
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Unknown => "",
        }
    }

    /// Inverse of `label` for the three known tiers.
    pub fn from_label(s: &str) -> Option<Rarity> {
        let s = s.trim();
        [Rarity::Common, Rarity::Uncommon, Rarity::Rare]
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s))
    }

    /// Sort key: Rare first, unknown last.
    pub fn precedence(self) -> u8 {
        match self {
            Rarity::Rare => 0,
            Rarity::Uncommon => 1,
            Rarity::Common => 2,
            Rarity::Unknown => 3,
        }
    }

    pub fn is_known(self) -> bool {
        self != Rarity::Unknown
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub item: String,
    pub rarity: Rarity,
    /// Raw drop-chance cell the rarity came from. Only set on scraped entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl RewardEntry {
    pub fn new(item: impl Into<String>, rarity: Rarity) -> Self {
        Self { item: item.into(), rarity, source: None }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub location: String,
    pub rewards: Vec<RewardEntry>,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Tier is the first word of the name ("Axi A1 Relic" → "Axi").
    pub fn tier(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub part: String,
    pub rarity: Rarity,
    /// Name of the relic this part drops from.
    #[serde(rename = "relic")]
    pub container: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducedItem {
    pub name: String,
    pub parts: Vec<Part>,
}

impl ProducedItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), parts: Vec::new() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub primes: Vec<ProducedItem>,
    pub relics: Vec<Container>,
}

impl Dataset {
    pub fn relic(&self, name: &str) -> Option<&Container> {
        self.relics.iter().find(|c| c.name == name)
    }

    pub fn prime(&self, name: &str) -> Option<&ProducedItem> {
        self.primes.iter().find(|p| p.name == name)
    }

    /// Drop parts whose relic isn't in the dataset. Returns how many were dropped.
    pub fn drop_dangling_parts(&mut self) -> usize {
        let known: std::collections::HashSet<String> =
            self.relics.iter().map(|c| c.name.clone()).collect();

        let mut dropped = 0;
        for item in &mut self.primes {
            let before = item.parts.len();
            item.parts.retain(|p| {
                let keep = known.contains(&p.container);
                if !keep {
                    logw!(part = %p.part, relic = %p.container, "part references unknown relic; dropped");
                }
                keep
            });
            dropped += before - item.parts.len();
        }
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_labels_round_trip() {
        for r in [Rarity::Common, Rarity::Uncommon, Rarity::Rare] {
            assert_eq!(Rarity::from_label(r.label()), Some(r));
        }
        assert_eq!(Rarity::from_label("rare"), Some(Rarity::Rare));
        assert_eq!(Rarity::from_label("Systems"), None);
        assert_eq!(Rarity::Unknown.label(), "");
    }

    #[test]
    fn rarity_serializes_unknown_as_empty() {
        let s = serde_json::to_string(&[Rarity::Rare, Rarity::Unknown]).unwrap();
        assert_eq!(s, r#"["Rare",""]"#);
    }

    #[test]
    fn tier_is_first_word() {
        assert_eq!(Container::new("Axi A1 Relic").tier(), "Axi");
        assert_eq!(Container::new("").tier(), "");
    }

    #[test]
    fn dangling_parts_are_dropped() {
        let mut ds = Dataset {
            primes: vec![ProducedItem {
                name: "Volt Prime".into(),
                parts: vec![
                    Part { part: "Volt Prime Chassis".into(), rarity: Rarity::Rare, container: "Axi A1 Relic".into() },
                    Part { part: "Volt Prime Systems".into(), rarity: Rarity::Common, container: "Lith Z9 Relic".into() },
                ],
            }],
            relics: vec![Container::new("Axi A1 Relic")],
        };
        assert_eq!(ds.drop_dangling_parts(), 1);
        assert_eq!(ds.primes[0].parts.len(), 1);
        assert_eq!(ds.primes[0].parts[0].container, "Axi A1 Relic");
    }
}

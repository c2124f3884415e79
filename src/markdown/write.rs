// src/markdown/write.rs

use std::fmt::Write as _;

use super::{ITEM_PREFIX, LOCATION_PREFIX, PART_DELIM, PART_PREFIX, PRIMES_HEADER, RELICS_HEADER, RELIC_PREFIX};
use crate::model::{Container, Part, ProducedItem, Rarity};

/// Encode primes and relics as the markdown digest.
///
/// Primes are sorted by name and their parts by rarity (Rare first); relics
/// and their rewards keep the order they were given in.
pub fn write(primes: &[ProducedItem], relics: &[Container]) -> String {
    let mut out = String::new();

    out.push_str(PRIMES_HEADER);
    out.push_str("\n\n");

    let mut sorted: Vec<&ProducedItem> = primes.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    for item in sorted {
        let _ = writeln!(out, "{ITEM_PREFIX}{}", item.name);

        let mut parts: Vec<&Part> = item.parts.iter().collect();
        parts.sort_by_key(|p| p.rarity.precedence());
        for p in parts {
            let _ = writeln!(
                out,
                "{PART_PREFIX}{} {PART_DELIM} {}",
                with_rarity(&p.part, p.rarity),
                p.container
            );
        }
    }

    out.push('\n');
    out.push_str(RELICS_HEADER);
    out.push_str("\n\n");

    for relic in relics {
        let _ = writeln!(out, "{RELIC_PREFIX}{}", relic.name);
        for reward in &relic.rewards {
            let _ = writeln!(out, "{ITEM_PREFIX}{}", with_rarity(&reward.item, reward.rarity));
        }
        let _ = writeln!(out, "{LOCATION_PREFIX} {}", relic.location);
        out.push('\n');
    }

    out
}

/// `"Name (Rarity)"`, or just `"Name"` when the rarity is unknown.
fn with_rarity(name: &str, rarity: Rarity) -> String {
    if rarity.is_known() {
        format!("{name} ({rarity})")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RewardEntry;

    #[test]
    fn layout_and_ordering() {
        let primes = vec![
            ProducedItem {
                name: "Volt Prime".into(),
                parts: vec![
                    Part { part: "Volt Prime Systems".into(), rarity: Rarity::Common, container: "Lith B2 Relic".into() },
                    Part { part: "Volt Prime Blueprint".into(), rarity: Rarity::Unknown, container: "Axi A1 Relic".into() },
                    Part { part: "Volt Prime Chassis".into(), rarity: Rarity::Rare, container: "Axi A1 Relic".into() },
                ],
            },
            ProducedItem {
                name: "Akstiletto Prime".into(),
                parts: vec![
                    Part { part: "Akstiletto Prime Barrel".into(), rarity: Rarity::Uncommon, container: "Axi A1 Relic".into() },
                ],
            },
        ];
        let mut axi = Container::new("Axi A1 Relic");
        axi.location = "Apollo (Lua)".into();
        axi.rewards = vec![
            RewardEntry::new("Volt Prime Chassis", Rarity::Rare),
            RewardEntry::new("Forma Blueprint", Rarity::Common),
        ];

        let md = write(&primes, &[axi]);
        let expected = "\
# Primes

- Akstiletto Prime
  - Akstiletto Prime Barrel (Uncommon) -> Axi A1 Relic
- Volt Prime
  - Volt Prime Chassis (Rare) -> Axi A1 Relic
  - Volt Prime Systems (Common) -> Lith B2 Relic
  - Volt Prime Blueprint -> Axi A1 Relic

# Relics

## Axi A1 Relic
- Volt Prime Chassis (Rare)
- Forma Blueprint (Common)
**Location**: Apollo (Lua)

";
        assert_eq!(md, expected);
    }

    #[test]
    fn empty_dataset_still_has_both_sections() {
        let md = write(&[], &[]);
        assert!(md.contains(PRIMES_HEADER));
        assert!(md.contains(RELICS_HEADER));
    }
}

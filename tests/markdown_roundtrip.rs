// tests/markdown_roundtrip.rs
//
// Digest written by the extractor must read back into the same records.
//
use std::collections::BTreeSet;

use relic_scrape::markdown;
use relic_scrape::primes;
use relic_scrape::{Container, ProducedItem, Rarity, RewardEntry};

fn relic(name: &str, location: &str, rewards: &[(&str, Rarity)]) -> Container {
    let mut c = Container::new(name);
    c.location = location.into();
    c.rewards = rewards
        .iter()
        .map(|(i, r)| RewardEntry::new(*i, *r).with_source("scraped"))
        .collect();
    c
}

fn sample() -> Vec<Container> {
    vec![
        relic("Axi A1 Relic", "Apollo (Lua)", &[
            ("Forma Blueprint", Rarity::Common),
            ("Volt Prime Systems Blueprint", Rarity::Common),
            ("Akstiletto Prime Barrel", Rarity::Uncommon),
            ("Volt Prime Chassis Blueprint", Rarity::Rare),
        ]),
        relic("Lith B2 Relic", "Hepit (Void)", &[
            ("Volt Prime Neuroptics Blueprint", Rarity::Uncommon),
            ("Mystery Drop", Rarity::Unknown),
        ]),
        relic("Requiem I Relic", "", &[]),
    ]
}

fn part_set(item: &ProducedItem) -> BTreeSet<(String, &'static str, String)> {
    item.parts
        .iter()
        .map(|p| (p.part.clone(), p.rarity.label(), p.container.clone()))
        .collect()
}

#[test]
fn relics_survive_round_trip() {
    let relics = sample();
    let grouped = primes::group(&relics, "Prime", "Forma");
    let md = markdown::write(&grouped, &relics);
    let back = markdown::read(&md);

    assert_eq!(back.relics.len(), relics.len());
    for (orig, got) in relics.iter().zip(&back.relics) {
        assert_eq!(got.name, orig.name);
        assert_eq!(got.location, orig.location);
        let want: Vec<(&str, Rarity)> = orig.rewards.iter().map(|r| (r.item.as_str(), r.rarity)).collect();
        let have: Vec<(&str, Rarity)> = got.rewards.iter().map(|r| (r.item.as_str(), r.rarity)).collect();
        assert_eq!(have, want);
        // the raw chance text is not part of the digest
        assert!(got.rewards.iter().all(|r| r.source.is_none()));
    }
}

#[test]
fn primes_survive_round_trip_modulo_part_order() {
    let relics = sample();
    let grouped = primes::group(&relics, "Prime", "Forma");
    let back = markdown::read(&markdown::write(&grouped, &relics));

    assert_eq!(back.primes.len(), grouped.len());
    for orig in &grouped {
        let got = back.prime(&orig.name).expect("prime present after round trip");
        assert_eq!(part_set(got), part_set(orig));
    }
    // written sorted by name
    let names: Vec<&str> = back.primes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Akstiletto Prime", "Volt Prime"]);
}

#[test]
fn parts_come_back_rarity_sorted() {
    let relics = sample();
    let grouped = primes::group(&relics, "Prime", "Forma");
    let back = markdown::read(&markdown::write(&grouped, &relics));

    let volt = back.prime("Volt Prime").unwrap();
    let rarities: Vec<Rarity> = volt.parts.iter().map(|p| p.rarity).collect();
    assert_eq!(rarities, vec![Rarity::Rare, Rarity::Uncommon, Rarity::Common]);
}

#[test]
fn second_round_trip_is_stable() {
    let relics = sample();
    let grouped = primes::group(&relics, "Prime", "Forma");
    let md1 = markdown::write(&grouped, &relics);
    let ds = markdown::read(&md1);
    let md2 = markdown::write(&ds.primes, &ds.relics);
    assert_eq!(md1, md2);
}

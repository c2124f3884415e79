// src/markdown/read.rs
// Line scanner for the markdown digest. Never fails: lines that don't fit the
// grammar are logged and skipped.

use std::collections::HashMap;

use super::{ITEM_PREFIX, LOCATION_PREFIX, PART_DELIM, PRIMES_HEADER, RELICS_HEADER, RELIC_PREFIX};
use crate::core::sanitize::split_paren_suffix;
use crate::model::{Container, Dataset, Part, ProducedItem, Rarity, RewardEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    None,
    Primes,
    Relics,
}

/// Decode a markdown digest.
pub fn read(text: &str) -> Dataset {
    let mut p = Parser::new();
    for (i, line) in text.lines().enumerate() {
        p.line(i + 1, line);
    }
    logf!(
        primes = p.primes.len(),
        relics = p.relics.len(),
        skipped = p.skipped,
        "parsed markdown digest"
    );
    Dataset { primes: p.primes, relics: p.relics }
}

struct Parser {
    section: Section,
    /// Index of the open prime or relic, depending on `section`.
    open: Option<usize>,
    primes: Vec<ProducedItem>,
    relics: Vec<Container>,
    prime_ix: HashMap<String, usize>,
    relic_ix: HashMap<String, usize>,
    skipped: usize,
}

impl Parser {
    fn new() -> Self {
        Self {
            section: Section::None,
            open: None,
            primes: Vec::new(),
            relics: Vec::new(),
            prime_ix: HashMap::new(),
            relic_ix: HashMap::new(),
            skipped: 0,
        }
    }

    fn line(&mut self, n: usize, raw: &str) {
        let line = raw.trim_end();
        if line.is_empty() {
            return;
        }

        match line.trim_start() {
            PRIMES_HEADER => return self.enter(Section::Primes),
            RELICS_HEADER => return self.enter(Section::Relics),
            _ => {}
        }

        match self.section {
            Section::Primes => self.prime_line(n, line),
            Section::Relics => self.relic_line(n, line),
            Section::None => self.skip(n, line, "outside of any section"),
        }
    }

    fn enter(&mut self, section: Section) {
        self.section = section;
        self.open = None;
    }

    fn skip(&mut self, n: usize, line: &str, reason: &str) {
        self.skipped += 1;
        logw!(line = n, reason, text = line, "skipping malformed markdown line");
    }

    /* ---------- # Primes ---------- */

    fn prime_line(&mut self, n: usize, line: &str) {
        let indented = line.starts_with(char::is_whitespace);
        let Some(body) = line.trim_start().strip_prefix(ITEM_PREFIX) else {
            return self.skip(n, line, "expected a `- ` list item");
        };

        if indented || body.contains(PART_DELIM) {
            return self.prime_part(n, line, body);
        }

        let name = body.trim();
        if name.is_empty() {
            return self.skip(n, line, "empty prime name");
        }
        let slot = match self.prime_ix.get(name) {
            Some(&ix) => ix,
            None => {
                self.primes.push(ProducedItem::new(name));
                self.prime_ix.insert(name.to_string(), self.primes.len() - 1);
                self.primes.len() - 1
            }
        };
        self.open = Some(slot);
    }

    fn prime_part(&mut self, n: usize, line: &str, body: &str) {
        let Some(slot) = self.open else {
            return self.skip(n, line, "part before any prime");
        };
        let Some((lhs, rhs)) = body.split_once(PART_DELIM) else {
            return self.skip(n, line, "part without `->` relic");
        };
        let container = rhs.trim();
        let (part, rarity) = split_rarity(lhs);
        if part.is_empty() || container.is_empty() {
            return self.skip(n, line, "empty part or relic name");
        }
        self.primes[slot].parts.push(Part {
            part: part.to_string(),
            rarity,
            container: container.to_string(),
        });
    }

    /* ---------- # Relics ---------- */

    fn relic_line(&mut self, n: usize, line: &str) {
        if let Some(name) = line.strip_prefix(RELIC_PREFIX) {
            let name = name.trim();
            if name.is_empty() {
                return self.skip(n, line, "empty relic name");
            }
            let slot = match self.relic_ix.get(name) {
                Some(&ix) => {
                    logw!(line = n, relic = name, "relic declared twice; reopening");
                    ix
                }
                None => {
                    self.relics.push(Container::new(name));
                    self.relic_ix.insert(name.to_string(), self.relics.len() - 1);
                    self.relics.len() - 1
                }
            };
            self.open = Some(slot);
            return;
        }

        let Some(slot) = self.open else {
            return self.skip(n, line, "line before any relic");
        };

        if let Some(loc) = line.strip_prefix(LOCATION_PREFIX) {
            self.relics[slot].location = loc.trim().to_string();
        } else if let Some(body) = line.strip_prefix(ITEM_PREFIX) {
            let (item, rarity) = split_rarity(body);
            if item.is_empty() {
                return self.skip(n, line, "empty reward name");
            }
            self.relics[slot].rewards.push(RewardEntry::new(item, rarity));
        } else {
            self.skip(n, line, "unrecognised line in relics section");
        }
    }
}

/// `"Name (Rare)"` → `("Name", Rare)`. A suffix that isn't a rarity label stays in the name.
fn split_rarity(text: &str) -> (&str, Rarity) {
    let text = text.trim();
    match split_paren_suffix(text) {
        (head, Some(inner)) => match Rarity::from_label(inner) {
            Some(r) => (head, r),
            None => (text, Rarity::Unknown),
        },
        (head, None) => (head, Rarity::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_both_sections() {
        let md = "\
# Primes

- Volt Prime
  - Volt Prime Chassis (Rare) -> Axi A1 Relic
  - Volt Prime Systems (Common) -> Lith B2 Relic

# Relics

## Axi A1 Relic
- Volt Prime Chassis (Rare)
- Forma Blueprint (Common)
**Location**: Apollo (Lua)
";
        let ds = read(md);
        assert_eq!(ds.primes.len(), 1);
        let volt = &ds.primes[0];
        assert_eq!(volt.name, "Volt Prime");
        assert_eq!(volt.parts[1].part, "Volt Prime Systems");
        assert_eq!(volt.parts[1].rarity, Rarity::Common);
        assert_eq!(volt.parts[1].container, "Lith B2 Relic");

        let axi = &ds.relics[0];
        assert_eq!(axi.location, "Apollo (Lua)");
        assert_eq!(axi.rewards[1], RewardEntry::new("Forma Blueprint", Rarity::Common));
    }

    #[test]
    fn flat_part_line_with_delimiter_is_a_part() {
        let ds = read("# Primes\n- Volt Prime\n- Volt Prime Chassis (Rare) -> Axi A1 Relic\n");
        assert_eq!(ds.primes.len(), 1);
        assert_eq!(ds.primes[0].parts.len(), 1);
    }

    #[test]
    fn reward_without_paren_keeps_full_text() {
        let ds = read("# Relics\n## Axi A1 Relic\n- BadLineNoParen\n");
        let r = &ds.relics[0].rewards[0];
        assert_eq!(r.item, "BadLineNoParen");
        assert_eq!(r.rarity, Rarity::Unknown);
        assert_eq!(r.rarity.label(), "");
    }

    #[test]
    fn non_rarity_suffix_stays_in_name() {
        let ds = read("# Relics\n## Axi A1 Relic\n- Odd Thing (Systems)\n");
        assert_eq!(ds.relics[0].rewards[0].item, "Odd Thing (Systems)");
        assert_eq!(ds.relics[0].rewards[0].rarity, Rarity::Unknown);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let md = "\
stray preamble
# Primes
  - Orphan Part (Rare) -> Axi A1 Relic
- Volt Prime
  - Missing Delimiter (Rare)
  -  (Rare) -> Axi A1 Relic
not a list item
-
# Relics
- reward before relic
**Location**: nowhere
##
## Axi A1 Relic
garbage
- Forma Blueprint (Common)
";
        let ds = read(md);
        assert_eq!(ds.primes.len(), 1);
        assert!(ds.primes[0].parts.is_empty());
        assert_eq!(ds.relics.len(), 1);
        assert_eq!(ds.relics[0].rewards.len(), 1);
        assert_eq!(ds.relics[0].location, "");
    }

    #[test]
    fn section_header_resets_open_entity() {
        let ds = read("# Relics\n## Axi A1 Relic\n# Relics\n- Forma Blueprint (Common)\n");
        assert!(ds.relics[0].rewards.is_empty());
    }

    #[test]
    fn repeated_headers_reopen() {
        let md = "# Primes\n- Volt Prime\n  - A (Rare) -> R\n- Volt Prime\n  - B (Common) -> R\n# Relics\n## R\n- A (Rare)\n## R\n- B (Common)\n";
        let ds = read(md);
        assert_eq!(ds.primes.len(), 1);
        assert_eq!(ds.primes[0].parts.len(), 2);
        assert_eq!(ds.relics.len(), 1);
        assert_eq!(ds.relics[0].rewards.len(), 2);
    }

    #[test]
    fn crlf_input() {
        let ds = read("# Relics\r\n## Axi A1 Relic\r\n- Forma Blueprint (Common)\r\n**Location**: Lua\r\n");
        assert_eq!(ds.relics[0].rewards[0].item, "Forma Blueprint");
        assert_eq!(ds.relics[0].location, "Lua");
    }
}

// src/config/options.rs
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::{Error, Result};
use crate::model::Rarity;

/// One `(token, rarity)` pair of the drop-chance table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityRule {
    pub token: String,
    pub rarity: Rarity,
}

impl RarityRule {
    pub fn new(token: &str, rarity: Rarity) -> Self {
        Self { token: token.to_string(), rarity }
    }
}

/// Everything the extractor needs to know about the source page.
///
/// Defaults match the live drop-table page. Any subset of fields can be
/// overridden with a JSON file named by `RELIC_SCRAPE_CONFIG`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub source_url: String,
    pub timeout_secs: u64,

    /// Headings of sub-tables whose rows name relics. Empty → discover every
    /// heading ending with `item_heading_suffix`.
    pub sub_table_titles: Vec<String>,
    /// Appended to a relic name to get the heading of its reward table.
    pub item_heading_suffix: String,

    /// Exact tier → location text ("Axi" → "Apollo (Lua)").
    pub locations_by_tier: BTreeMap<String, String>,

    /// Evaluated in order; first token contained in the chance text wins.
    pub rarity_rules: Vec<RarityRule>,

    pub prime_marker: String,
    pub prime_exclusion: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        let locations = [
            "Hepit (Void), Ani (Void)",
            "Io (Jupiter), Olympus (Mars)",
            "Ukko (Void), Xini (Eris)",
            "Apollo (Lua), Mot (Void)",
        ];
        Self {
            source_url: SOURCE_URL.to_string(),
            timeout_secs: TIMEOUT_SECS,
            sub_table_titles: Vec::new(),
            item_heading_suffix: ITEM_HEADING_SUFFIX.to_string(),
            locations_by_tier: TIERS
                .iter()
                .zip(locations)
                .map(|(tier, loc)| (tier.to_string(), loc.to_string()))
                .collect(),
            rarity_rules: vec![
                RarityRule::new(CHANCE_COMMON, Rarity::Common),
                RarityRule::new(CHANCE_UNCOMMON, Rarity::Uncommon),
                RarityRule::new(CHANCE_RARE, Rarity::Rare),
            ],
            prime_marker: PRIME_MARKER.to_string(),
            prime_exclusion: PRIME_EXCLUSION.to_string(),
        }
    }
}

impl ExtractOptions {
    /// Defaults, overridden by the file in `RELIC_SCRAPE_CONFIG` when set.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::file_io(path, e))?;
        let opts: ExtractOptions = serde_json::from_str(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        logf!(path = %path.display(), "loaded extractor config");
        Ok(opts)
    }

    pub fn location_for(&self, tier: &str) -> &str {
        self.locations_by_tier.get(tier).map(String::as_str).unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: String,
    /// Part-name substrings that mark a prime as a warframe.
    pub frame_markers: Vec<String>,
    pub debounce_ms: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_MARKDOWN),
            output: PathBuf::from(DEFAULT_PAGE),
            title: PAGE_TITLE.to_string(),
            frame_markers: FRAME_MARKERS.iter().map(|s| s.to_string()).collect(),
            debounce_ms: SEARCH_DEBOUNCE_MS,
        }
    }
}

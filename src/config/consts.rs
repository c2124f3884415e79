// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str =
    "https://warframe-web-assets.nyc3.cdn.digitaloceanspaces.com/uploads/cms/hnfvc0o3jnfvc873njb03enrf56.html";
pub const USER_AGENT: &str = concat!("relic_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;

// Files
pub const DEFAULT_MARKDOWN: &str = "relics.md";
pub const DEFAULT_PAGE: &str = "index.html";
pub const CONFIG_ENV: &str = "RELIC_SCRAPE_CONFIG";

// Scrape
pub const ITEM_HEADING_SUFFIX: &str = " (Intact)";
pub const PRIME_MARKER: &str = "Prime";
pub const PRIME_EXCLUSION: &str = "Forma";
pub const TIERS: [&str; 4] = ["Lith", "Meso", "Neo", "Axi"];

// Drop chances of an intact relic, one per rarity tier
pub const CHANCE_COMMON: &str = "25.33%";
pub const CHANCE_UNCOMMON: &str = "11.00%";
pub const CHANCE_RARE: &str = "2.00%";

// Render
pub const PAGE_TITLE: &str = "Prime Relic Drops";
pub const FRAME_MARKERS: [&str; 3] = ["Systems", "Chassis", "Neuroptics"];
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

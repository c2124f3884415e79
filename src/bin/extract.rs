// src/bin/extract.rs
use relic_scrape::{cli, log, loge, logf};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let summary = cli::run_extract(std::env::args().skip(1))
        .inspect_err(|e| loge!("extract failed: {e}"))?;

    if let Some(s) = summary {
        logf!("{} relics, {} primes → {}", s.relics, s.primes, s.path.display());
    }
    Ok(())
}

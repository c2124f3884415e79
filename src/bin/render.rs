// src/bin/render.rs
use relic_scrape::{cli, log, loge, logf};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let summary = cli::run_render(std::env::args().skip(1))
        .inspect_err(|e| loge!("render failed: {e}"))?;

    if let Some(s) = summary {
        logf!("{} primes, {} relics → {}", s.primes, s.relics, s.path.display());
    }
    Ok(())
}

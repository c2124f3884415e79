// src/runner.rs
// Top-level pipelines. `*_from_*` functions are pure; `extract` and `render`
// add the network and file boundaries around them.

use std::path::{Path, PathBuf};

use crate::{
    category,
    config::{ExtractOptions, RenderOptions},
    core::{html::TableDoc, net},
    error::Result,
    file, markdown, page, primes, specs,
    model::Dataset,
};

/// What the extractor produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractSummary {
    pub path: PathBuf,
    pub relics: usize,
    pub rewards: usize,
    pub primes: usize,
}

/// What the renderer produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSummary {
    pub path: PathBuf,
    pub primes: usize,
    pub frames: usize,
    pub weapons: usize,
    pub relics: usize,
    /// Parts dropped because their relic wasn't in the digest.
    pub dropped_parts: usize,
}

/* ---------------- Extractor ---------------- */

/// Page HTML → dataset. Missing headings shrink the result; they never fail it.
pub fn dataset_from_html(html: &str, opts: &ExtractOptions) -> Result<Dataset> {
    let doc = TableDoc::parse(html)?;
    let relics = specs::relics::extract(&doc, opts);
    if relics.is_empty() {
        logw!("no relics found on the page; has the layout changed?");
    }
    let primes = primes::group(&relics, &opts.prime_marker, &opts.prime_exclusion);
    Ok(Dataset { primes, relics })
}

/// Page HTML → markdown digest.
pub fn markdown_from_html(html: &str, opts: &ExtractOptions) -> Result<String> {
    let ds = dataset_from_html(html, opts)?;
    Ok(markdown::write(&ds.primes, &ds.relics))
}

/// Fetch the source page and write the digest to `out`.
pub fn extract(opts: &ExtractOptions, out: &Path) -> Result<ExtractSummary> {
    let html = net::http_get(&opts.source_url, opts.timeout_secs)?;
    let ds = dataset_from_html(&html, opts)?;
    let md = markdown::write(&ds.primes, &ds.relics);
    file::write_text(out, &md)?;

    let summary = ExtractSummary {
        path: out.to_path_buf(),
        relics: ds.relics.len(),
        rewards: ds.relics.iter().map(|r| r.rewards.len()).sum(),
        primes: ds.primes.len(),
    };
    logf!(
        path = %summary.path.display(),
        relics = summary.relics,
        rewards = summary.rewards,
        primes = summary.primes,
        "wrote digest"
    );
    Ok(summary)
}

/* ---------------- Renderer ---------------- */

/// Markdown digest → page HTML, plus the summary (path left empty).
pub fn page_from_markdown(md: &str, opts: &RenderOptions) -> Result<(String, RenderSummary)> {
    let mut ds = markdown::read(md);
    let dropped_parts = ds.drop_dangling_parts();
    let (frames, weapons) = category::partition(&ds.primes, opts.frame_markers.as_slice());

    let summary = RenderSummary {
        path: PathBuf::new(),
        primes: ds.primes.len(),
        frames: frames.len(),
        weapons: weapons.len(),
        relics: ds.relics.len(),
        dropped_parts,
    };
    let html = page::emit(&ds, opts)?;
    Ok((html, summary))
}

/// Read `opts.input`, write the page to `opts.output`.
pub fn render(opts: &RenderOptions) -> Result<RenderSummary> {
    let md = file::read_text(&opts.input)?;
    let (html, mut summary) = page_from_markdown(&md, opts)?;
    file::write_text(&opts.output, &html)?;

    summary.path = opts.output.clone();
    logf!(
        path = %summary.path.display(),
        primes = summary.primes,
        frames = summary.frames,
        weapons = summary.weapons,
        relics = summary.relics,
        "wrote page"
    );
    if summary.dropped_parts > 0 {
        logw!(dropped = summary.dropped_parts, "parts referenced relics missing from the digest");
    }
    Ok(summary)
}

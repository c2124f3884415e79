// src/page/mod.rs
//! Static page emitter.
//!
//! The page is a fixed shell (markup, `style.css`, `controller.js`) plus the
//! dataset serialized as inline JSON. Everything interactive happens in the
//! browser: the controller owns one state object (tab, search term, expanded
//! keys) and re-renders the content region from it on every change.

use std::fmt::Write as _;

use serde::Serialize;

use crate::category;
use crate::config::RenderOptions;
use crate::core::sanitize::{escape_html, escape_json_for_script};
use crate::error::Result;
use crate::model::{Container, Dataset, ProducedItem};

const STYLE: &str = include_str!("style.css");
const CONTROLLER: &str = include_str!("controller.js");
const FONT_HREF: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;600&display=swap";

#[derive(Serialize)]
struct PageData<'a> {
    primes: Primes<'a>,
    relics: &'a [Container],
}

#[derive(Serialize)]
struct Primes<'a> {
    frames: Vec<&'a ProducedItem>,
    weapons: Vec<&'a ProducedItem>,
}

/// Classified dataset as the JSON the controller reads.
pub fn page_json(dataset: &Dataset, frame_markers: &[String]) -> Result<String> {
    let (frames, weapons) = category::partition(&dataset.primes, frame_markers);
    let data = PageData {
        primes: Primes { frames, weapons },
        relics: &dataset.relics,
    };
    Ok(serde_json::to_string(&data)?)
}

/// Build the complete, self-contained page.
pub fn emit(dataset: &Dataset, opts: &RenderOptions) -> Result<String> {
    let json = page_json(dataset, &opts.frame_markers)?;
    let (frames, weapons) = category::partition(&dataset.primes, opts.frame_markers.as_slice());
    let title = escape_html(&opts.title);

    let mut out = String::with_capacity(STYLE.len() + CONTROLLER.len() + json.len() + 2048);
    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="stylesheet" href="{FONT_HREF}">
<style>
{STYLE}</style>
</head>
<body data-debounce="{debounce}">
<header class="top">
<h1>{title}</h1>
<p class="counts">{primes} primes · {frames} warframes · {weapons} weapons · {relics} relics</p>
<div class="controls">
<nav class="tabs" role="tablist">
<button type="button" class="tab active" role="tab" data-tab="primes" aria-selected="true">Primes</button>
<button type="button" class="tab" role="tab" data-tab="relics" aria-selected="false">Relics</button>
</nav>
<input id="search" type="search" placeholder="Search items, parts or relics" autocomplete="off" aria-label="Search">
</div>
</header>
<main id="content"><noscript><p class="empty">This page needs JavaScript.</p></noscript></main>
<div id="popup" class="popup" hidden></div>
<script id="relic-data" type="application/json">{data}</script>
<script>
{CONTROLLER}</script>
</body>
</html>
"#,
        debounce = opts.debounce_ms,
        primes = dataset.primes.len(),
        frames = frames.len(),
        weapons = weapons.len(),
        relics = dataset.relics.len(),
        data = escape_json_for_script(&json),
    );
    Ok(out)
}

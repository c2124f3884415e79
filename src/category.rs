// src/category.rs
// Frame vs weapon split for the primes view. Name-based heuristic only.

use serde::Serialize;

use crate::model::ProducedItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frame,
    Weapon,
}

/// `Frame` if any part name contains one of `frame_markers`, else `Weapon`.
pub fn classify<S: AsRef<str>>(item: &ProducedItem, frame_markers: &[S]) -> Category {
    let is_frame = item.parts.iter().any(|p| {
        frame_markers
            .iter()
            .map(AsRef::as_ref)
            .any(|m| !m.is_empty() && p.part.contains(m))
    });
    if is_frame { Category::Frame } else { Category::Weapon }
}

/// Split primes into `(frames, weapons)`, keeping input order within each.
pub fn partition<'a, S: AsRef<str>>(
    primes: &'a [ProducedItem],
    frame_markers: &[S],
) -> (Vec<&'a ProducedItem>, Vec<&'a ProducedItem>) {
    primes
        .iter()
        .partition(|item| classify(item, frame_markers) == Category::Frame)
}

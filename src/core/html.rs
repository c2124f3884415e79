// src/core/html.rs
// Row-level access to the drop-table page.
//
// The page is one long run of `<tr>` rows. A table starts at a row whose header
// cell carries its title and ends at the next "blank row" separator:
//
//   <tr><th colspan="2">Axi A1 Relic (Intact)</th></tr>
//   <tr><td>Forma Blueprint</td><td>Uncommon (11.00%)</td></tr>
//   <tr class="blank-row"><td class="blank-row" colspan="2"></td></tr>

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;
use crate::error::{Error, Result};

const BLANK_ROW_CLASS: &str = "blank-row";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(css.to_string()))
}

/// A parsed page plus the handful of selectors every lookup needs.
pub struct TableDoc {
    html: Html,
    row: Selector,
    header: Selector,
    cell: Selector,
}

impl TableDoc {
    pub fn parse(doc: &str) -> Result<Self> {
        Ok(Self {
            html: Html::parse_document(doc),
            row: selector("tr")?,
            header: selector("th")?,
            cell: selector("td")?,
        })
    }

    fn rows(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.select(&self.row)
    }

    fn header_texts<'a>(&'a self, row: ElementRef<'a>) -> impl Iterator<Item = String> + 'a {
        row.select(&self.header).map(element_text)
    }

    fn cell_texts(&self, row: ElementRef<'_>) -> Vec<String> {
        row.select(&self.cell).map(element_text).collect()
    }

    fn is_blank(&self, row: ElementRef<'_>) -> bool {
        if row.value().classes().any(|c| c == BLANK_ROW_CLASS) {
            return true;
        }
        let has_header = row.select(&self.header).next().is_some();
        !has_header && self.cell_texts(row).iter().all(|c| c.is_empty())
    }

    /// Data rows (cell texts) of the table titled `heading`.
    /// `None` when no header cell on the page reads exactly `heading`.
    pub fn rows_under(&self, heading: &str) -> Option<Vec<Vec<String>>> {
        let mut rows = self.rows();
        rows.by_ref()
            .find(|row| self.header_texts(*row).any(|t| t == heading))?;

        let mut out = Vec::new();
        for row in rows {
            if self.is_blank(row) {
                break;
            }
            // nested-table noise
            if row.select(&self.header).next().is_some() {
                logd!(heading, "skipping row with header cells");
                continue;
            }
            out.push(self.cell_texts(row));
        }
        Some(out)
    }

    /// Names listed under a sub-table heading (first cell of each row).
    pub fn locate_subtable(&self, title: &str) -> Vec<String> {
        let Some(rows) = self.rows_under(title) else {
            logw!(heading = title, "sub-table heading not found");
            return Vec::new();
        };
        rows.into_iter()
            .filter_map(|r| r.into_iter().next())
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// `(item, chance)` rows of an item's reward table.
    /// Rows without a second cell are skipped.
    pub fn locate_item_rows(&self, title: &str) -> Vec<(String, String)> {
        let Some(rows) = self.rows_under(title) else {
            logw!(heading = title, "item heading not found");
            return Vec::new();
        };
        rows.into_iter()
            .filter_map(|r| {
                let mut cells = r.into_iter();
                match (cells.next(), cells.next()) {
                    (Some(item), Some(chance)) if !item.is_empty() => Some((item, chance)),
                    _ => None,
                }
            })
            .collect()
    }

    /// Every header-cell text ending with `suffix`, in page order, without repeats.
    pub fn headings_ending_with(&self, suffix: &str) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.rows()
            .flat_map(|row| self.header_texts(row).collect::<Vec<_>>())
            .filter(|t| t.ends_with(suffix) && t.len() > suffix.len())
            .filter(|t| seen.insert(t.clone()))
            .collect()
    }
}

fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

//! Null-tolerant extraction steps over a parsed sustainability page.
//!
//! Each step looks up its own section and returns `None` (or an empty map) when any
//! part of the expected structure is missing, so a layout change in one section never
//! leaks into the fields read from another.

use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

pub(crate) const TOTAL_ESG_SCORE: &str = "TOTAL_ESG_SCORE";
pub(crate) const ENVIRONMENTAL_SCORE: &str = "ENVIRONMENTAL_SCORE";
pub(crate) const SOCIAL_SCORE: &str = "SOCIAL_SCORE";
pub(crate) const GOVERNANCE_SCORE: &str = "GOVERNANCE_SCORE";
pub(crate) const INVOLVEMENT_AREAS: &str = "involvement-areas";
pub(crate) const ESG_CONTROVERSY: &str = "esg-controversy";

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// Trimmed text content of an element and all its descendants.
pub(crate) fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Parse a trimmed number; anything else is `None`.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    scope.select(&sel).next()
}

/// First `<section data-testid="{testid}">` in the document.
pub(crate) fn section<'a>(doc: &'a Html, testid: &str) -> Option<ElementRef<'a>> {
    let sel = selector(&format!(r#"section[data-testid="{testid}"]"#))?;
    doc.select(&sel).next()
}

/// Score heading (`<h4>`) of a score section.
pub(crate) fn section_score(doc: &Html, testid: &str) -> Option<f64> {
    let sec = section(doc, testid)?;
    let h4 = first(sec, "h4")?;
    parse_number(&text_of(h4))
}

/// Risk label (`<span class="perf">`) of a score section.
pub(crate) fn section_level(doc: &Html, testid: &str) -> Option<String> {
    let sec = section(doc, testid)?;
    let span = first(sec, "span.perf")?;
    Some(text_of(span)).filter(|s| !s.is_empty())
}

/// Product involvement table: header row skipped, two-cell rows only, last row wins.
pub(crate) fn involvement_areas(doc: &Html) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    let Some(table) = section(doc, INVOLVEMENT_AREAS).and_then(|s| first(s, "table")) else {
        return out;
    };
    let (Some(tr), Some(td)) = (selector("tr"), selector("td")) else {
        return out;
    };

    for row in table.select(&tr).skip(1) {
        let cells: Vec<ElementRef<'_>> = row.select(&td).collect();
        if let [product, involvement] = cells.as_slice() {
            out.insert(text_of(*product), text_of(*involvement));
        }
    }
    out
}

/// Controversy level: first span of the value block, which carries at least two spans.
pub(crate) fn controversy_score(doc: &Html) -> Option<f64> {
    let sec = section(doc, ESG_CONTROVERSY)?;
    let val = first(sec, "div.val")?;
    let span = selector("span")?;
    let spans: Vec<ElementRef<'_>> = val.select(&span).collect();
    if spans.len() < 2 {
        return None;
    }
    parse_number(&text_of(spans[0]))
}

/// Peer category average from the controversy tooltip.
pub(crate) fn controversy_category_average(doc: &Html) -> Option<f64> {
    let sec = section(doc, ESG_CONTROVERSY)?;
    let tooltip = first(sec, "div.tooltip")?;
    let peer = first(tooltip, "span.peer-score")?;
    parse_number(&text_of(peer))
}

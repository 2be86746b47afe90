//! Scrape the Yahoo sustainability HTML into [`EsgScores`].

use scraper::Html;

use super::EsgScores;

pub(crate) mod extract;
#[cfg(any(debug_assertions, feature = "debug-dumps"))]
pub(crate) mod debug;

use extract::{
    ENVIRONMENTAL_SCORE, GOVERNANCE_SCORE, SOCIAL_SCORE, TOTAL_ESG_SCORE, controversy_category_average,
    controversy_score, involvement_areas, section_level, section_score,
};

/// Extract every field of a sustainability page.
///
/// Never fails: a page without any of the expected sections yields an all-`None`
/// record with an empty involvement map.
pub fn parse_sustainability_html(body: &str) -> EsgScores {
    let doc = Html::parse_document(body);

    let scores = EsgScores {
        total: section_score(&doc, TOTAL_ESG_SCORE),
        total_level: section_level(&doc, TOTAL_ESG_SCORE),
        environmental: section_score(&doc, ENVIRONMENTAL_SCORE),
        social: section_score(&doc, SOCIAL_SCORE),
        governance: section_score(&doc, GOVERNANCE_SCORE),
        controversy_score: controversy_score(&doc),
        controversy_category_average: controversy_category_average(&doc),
        involvement_areas: involvement_areas(&doc),
    };

    tracing::trace!(
        total = ?scores.total,
        level = ?scores.total_level,
        involvement = scores.involvement_areas.len(),
        "parsed sustainability page"
    );
    scores
}

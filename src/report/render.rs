//! Plain-text rendering of summaries and per-ticker details.

use std::fmt::Write as _;

use super::{EsgRow, EsgTable, Summary};
use crate::esg::RiskLevel;

const BAR_WIDTH: usize = 30;

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |v| format!("{v}"))
}

fn fmt_opt1(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |v| format!("{v:.1}"))
}

/// Portfolio overview: headline metrics, level distribution, component averages and,
/// when `top` is set, the highest-risk companies.
pub fn render_overview(summary: &Summary, table: &EsgTable, top: Option<usize>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ESG Overview");
    let _ = writeln!(out, "============");

    let _ = writeln!(
        out,
        "Data Coverage:          {:.1}% ({}/{} companies)",
        summary.coverage_pct, summary.valid, summary.requested
    );
    match (summary.mean_total, summary.median_total) {
        (Some(avg), Some(med)) => {
            let _ = writeln!(
                out,
                "Avg ESG Risk Score:     {avg:.1} ({:+.1} vs median)",
                avg - med
            );
        }
        _ => {
            let _ = writeln!(out, "Avg ESG Risk Score:     N/A");
        }
    }
    let _ = writeln!(
        out,
        "High Risk Companies:    {} ({:.1}% of portfolio)",
        summary.severe_count, summary.severe_pct
    );
    match summary.most_common_level() {
        Some((level, n)) => {
            let _ = writeln!(out, "Most Common Risk Level: {} ({n} companies)", level.title());
        }
        None => {
            let _ = writeln!(out, "Most Common Risk Level: N/A");
        }
    }

    let _ = writeln!(out, "\nRisk Level Breakdown");
    let max = summary.level_counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
    for (level, n) in &summary.level_counts {
        let width = if max == 0 { 0 } else { n * BAR_WIDTH / max };
        let _ = writeln!(
            out,
            "  {:<11} {:<w$} {n} companies ({:.1}%)",
            level.as_str(),
            "#".repeat(width),
            super::stats::percent(*n, summary.valid),
            w = BAR_WIDTH
        );
        let _ = writeln!(out, "  {:<11} {}", "", level.badge());
    }

    let _ = writeln!(out, "\nAverage ESG");
    if let Some((name, v)) = summary.components.highest() {
        let _ = writeln!(out, "  Highest average risk: {name} ({v:.1})");
    }
    for (name, v) in summary.components.iter() {
        let _ = writeln!(out, "  {name}: {}", fmt_opt1(v));
    }

    if let Some(n) = top {
        let _ = writeln!(out, "\nHighest Risk Companies");
        for row in table.top_by_total(n) {
            let _ = writeln!(
                out,
                "  {:<8} {:>6.1}  {}",
                row.ticker,
                row.total(),
                row.scores.total_level.as_deref().unwrap_or("N/A")
            );
        }
    }
    out
}

/// Detail view for a single company.
pub fn render_detail(row: &EsgRow) -> String {
    let s = &row.scores;
    let mut out = String::new();
    let _ = writeln!(out, "Details for {}", row.ticker);
    let _ = writeln!(out, "Total ESG Risk Score: {}", fmt_opt(s.total));
    let _ = writeln!(
        out,
        "Risk Level:           {}",
        RiskLevel::from_label(s.total_level.as_deref()).badge()
    );
    let _ = writeln!(out, "Environmental Risk:   {}", fmt_opt(s.environmental));
    let _ = writeln!(out, "Social Risk:          {}", fmt_opt(s.social));
    let _ = writeln!(out, "Governance Risk:      {}", fmt_opt(s.governance));

    let _ = writeln!(out, "\nProduct Involvement Areas");
    if s.involvement_areas.is_empty() {
        let _ = writeln!(out, "  (none reported)");
    } else {
        let w = s.involvement_areas.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        let _ = writeln!(out, "  {:<w$}  Involvement", "Product");
        for (product, involvement) in &s.involvement_areas {
            let _ = writeln!(out, "  {product:<w$}  {involvement}");
        }
    }

    let _ = writeln!(out, "\nControversy");
    let _ = writeln!(out, "Score: {}", fmt_opt(s.controversy_score));
    let _ = writeln!(out, "Category Average: {}", fmt_opt(s.controversy_category_average));
    out
}

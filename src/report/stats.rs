//! Aggregate statistics over an [`EsgTable`].

use serde::Serialize;

use super::EsgTable;
use crate::esg::RiskLevel;

/// Portfolio-level view of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub requested: usize,
    pub valid: usize,
    /// Percent of requested tickers with data; 0 when nothing was requested.
    pub coverage_pct: f64,
    pub mean_total: Option<f64>,
    pub median_total: Option<f64>,
    pub severe_count: usize,
    /// Percent of valid rows rated severe.
    pub severe_pct: f64,
    /// Count per normalized level, most frequent first; ties keep first appearance.
    pub level_counts: Vec<(RiskLevel, usize)>,
    pub components: ComponentAverages,
}

/// Mean component scores; rows missing a component are skipped for that component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ComponentAverages {
    pub environmental: Option<f64>,
    pub social: Option<f64>,
    pub governance: Option<f64>,
}

impl ComponentAverages {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<f64>)> {
        [
            ("Environmental", self.environmental),
            ("Social", self.social),
            ("Governance", self.governance),
        ]
        .into_iter()
    }

    /// Component with the largest average. The first one wins a tie.
    pub fn highest(&self) -> Option<(&'static str, f64)> {
        self.iter()
            .filter_map(|(name, v)| v.map(|v| (name, v)))
            .fold(None, |best, cur| match best {
                Some((_, b)) if b >= cur.1 => best,
                _ => Some(cur),
            })
    }
}

impl Summary {
    pub fn from_table(table: &EsgTable) -> Self {
        let requested = table.requested;
        let valid = table.len();
        let totals: Vec<f64> = table.rows.iter().filter_map(|r| r.scores.total).collect();

        let level_counts = level_counts(table);
        let severe_count = level_counts
            .iter()
            .find(|(l, _)| *l == RiskLevel::Severe)
            .map_or(0, |(_, n)| *n);

        Summary {
            requested,
            valid,
            coverage_pct: percent(valid, requested),
            mean_total: mean(&totals),
            median_total: median(&totals),
            severe_count,
            severe_pct: percent(severe_count, valid),
            level_counts,
            components: ComponentAverages {
                environmental: mean_of(table, |s| s.environmental),
                social: mean_of(table, |s| s.social),
                governance: mean_of(table, |s| s.governance),
            },
        }
    }

    /// Most frequent risk level and its count.
    pub fn most_common_level(&self) -> Option<&(RiskLevel, usize)> {
        self.level_counts.first()
    }
}

fn level_counts(table: &EsgTable) -> Vec<(RiskLevel, usize)> {
    let mut counts: Vec<(RiskLevel, usize)> = Vec::new();
    for row in &table.rows {
        let level = row.scores.risk_level();
        match counts.iter_mut().find(|(l, _)| *l == level) {
            Some((_, n)) => *n += 1,
            None => counts.push((level, 1)),
        }
    }
    // stable: equal counts keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn mean_of(table: &EsgTable, f: impl Fn(&crate::esg::EsgScores) -> Option<f64>) -> Option<f64> {
    let vals: Vec<f64> = table.rows.iter().filter_map(|r| f(&r.scores)).collect();
    mean(&vals)
}

pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

pub(crate) fn mean(vals: &[f64]) -> Option<f64> {
    if vals.is_empty() {
        return None;
    }
    Some(vals.iter().sum::<f64>() / vals.len() as f64)
}

pub(crate) fn median(vals: &[f64]) -> Option<f64> {
    if vals.is_empty() {
        return None;
    }
    let mut v = vals.to_vec();
    v.sort_by(f64::total_cmp);
    let mid = v.len() / 2;
    if v.len() % 2 == 0 {
        Some((v[mid - 1] + v[mid]) / 2.0)
    } else {
        Some(v[mid])
    }
}

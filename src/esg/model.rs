use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// ESG risk metrics scraped from a ticker's sustainability page.
///
/// Every field is optional: a section that is missing from the page, or whose number
/// does not parse, leaves its field `None` without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EsgScores {
    /// Total ESG risk score. A record without it counts as "no data".
    pub total: Option<f64>,
    /// Qualitative label shown next to the total score (e.g. "Low", "Severe").
    pub total_level: Option<String>,
    /// Environmental risk score.
    pub environmental: Option<f64>,
    /// Social risk score.
    pub social: Option<f64>,
    /// Governance risk score.
    pub governance: Option<f64>,
    /// Controversy level of the company.
    pub controversy_score: Option<f64>,
    /// Average controversy level of the company's peer category.
    pub controversy_category_average: Option<f64>,
    /// Product involvement areas: product or activity name to involvement descriptor.
    pub involvement_areas: BTreeMap<String, String>,
}

impl EsgScores {
    /// Whether the page carried a total score.
    pub fn has_data(&self) -> bool {
        self.total.is_some()
    }

    /// Normalized risk level of the total score.
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_label(self.total_level.as_deref())
    }
}

/// Normalized view of the total risk label.
///
/// The set of labels published by the site is open; anything not recognized is kept,
/// lowercased, in [`RiskLevel::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Negligible,
    Low,
    Medium,
    High,
    Severe,
    /// No label on the page.
    Unknown,
    Other(String),
}

impl RiskLevel {
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(raw) = label else {
            return RiskLevel::Unknown;
        };
        let norm = raw.trim().to_lowercase();
        match norm.as_str() {
            "negligible" => RiskLevel::Negligible,
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            "severe" => RiskLevel::Severe,
            "" | "unknown" => RiskLevel::Unknown,
            _ => RiskLevel::Other(norm),
        }
    }

    /// Lowercase label.
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Negligible => "negligible",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Severe => "severe",
            RiskLevel::Unknown => "unknown",
            RiskLevel::Other(s) => s,
        }
    }

    /// Label with the first letter uppercased ("severe" -> "Severe").
    pub fn title(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Colored badge for terminal output; unrecognized levels render as `N/A`.
    pub fn badge(&self) -> String {
        let dot = match self {
            RiskLevel::Negligible => "🟢",
            RiskLevel::Low => "🟡",
            RiskLevel::Medium => "🟠",
            RiskLevel::High | RiskLevel::Severe => "🔴",
            RiskLevel::Unknown | RiskLevel::Other(_) => return "N/A".to_string(),
        };
        format!("{dot} {}", self.title())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

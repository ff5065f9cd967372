use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerritoryProfile {
    pub name: String,
    pub text_fraction: f64,
    pub media_fraction: f64,
}

impl TerritoryProfile {
    pub fn new(name: impl Into<String>, text_fraction: f64, media_fraction: f64) -> Self {
        Self {
            name: name.into(),
            text_fraction,
            media_fraction,
        }
    }
}

/// Search-visibility maturity of a territory.
///
/// - **Maintenance**: coverage >= 70%
/// - **Scale**: coverage >= 30% and < 70%
/// - **Growth**: coverage < 30%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaturityTier {
    Growth,
    Scale,
    Maintenance,
}

impl MaturityTier {
    pub const MAINTENANCE_THRESHOLD: f64 = 0.70;
    pub const SCALE_THRESHOLD: f64 = 0.30;

    pub fn from_coverage(coverage_ratio: f64) -> Self {
        if coverage_ratio >= Self::MAINTENANCE_THRESHOLD {
            Self::Maintenance
        } else if coverage_ratio >= Self::SCALE_THRESHOLD {
            Self::Scale
        } else {
            Self::Growth
        }
    }

    /// Queries needed to justify one content piece.
    pub fn queries_per_content(self) -> u64 {
        match self {
            Self::Maintenance => 150,
            Self::Scale => 100,
            Self::Growth => 50,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Maintenance => "Maintenance",
            Self::Scale => "Scale",
            Self::Growth => "Growth",
        }
    }
}

impl fmt::Display for MaturityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSplit {
    pub text_contents: u64,
    pub media_contents: u64,
    pub text_fraction: f64,
    pub media_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoveragePlan {
    pub macro_territory: String,
    pub territory: String,
    pub overall_queries: u64,
    pub covered_queries: u64,
    pub coverage_ratio: f64,
    pub maturity_tier: MaturityTier,
    pub gap_queries: u64,
    pub recommended_contents: u64,
    pub split: ContentSplit,
}

impl CoveragePlan {
    /// Coverage percentage with two decimals, rounded from the exact binary
    /// value with ties to even (1/32 -> "3.12").
    pub fn coverage_percent_label(&self) -> String {
        format!("{:.2}", self.coverage_ratio * 100.0)
    }

    /// Numeric form of [`Self::coverage_percent_label`].
    pub fn coverage_percent(&self) -> f64 {
        self.coverage_percent_label()
            .parse()
            .unwrap_or(self.coverage_ratio * 100.0)
    }

    pub fn text_contents(&self) -> u64 {
        self.split.text_contents
    }

    pub fn media_contents(&self) -> u64 {
        self.split.media_contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(MaturityTier::from_coverage(0.70), MaturityTier::Maintenance);
        assert_eq!(MaturityTier::from_coverage(69.0 / 100.0), MaturityTier::Scale);
        assert_eq!(MaturityTier::from_coverage(0.30), MaturityTier::Scale);
        assert_eq!(MaturityTier::from_coverage(29.0 / 100.0), MaturityTier::Growth);
        assert_eq!(MaturityTier::from_coverage(0.0), MaturityTier::Growth);
        assert_eq!(MaturityTier::from_coverage(1.0), MaturityTier::Maintenance);
    }

    #[test]
    fn test_queries_per_content() {
        assert_eq!(MaturityTier::Maintenance.queries_per_content(), 150);
        assert_eq!(MaturityTier::Scale.queries_per_content(), 100);
        assert_eq!(MaturityTier::Growth.queries_per_content(), 50);
    }

    #[test]
    fn test_coverage_percent_rounding() {
        let plan = CoveragePlan {
            macro_territory: "Skincare".to_string(),
            territory: "anti-acne".to_string(),
            overall_queries: 3,
            covered_queries: 1,
            coverage_ratio: 1.0 / 3.0,
            maturity_tier: MaturityTier::Scale,
            gap_queries: 2,
            recommended_contents: 1,
            split: ContentSplit {
                text_contents: 1,
                media_contents: 0,
                text_fraction: 0.9,
                media_fraction: 0.1,
            },
        };
        assert_eq!(plan.coverage_percent(), 33.33);
        assert_eq!(plan.coverage_percent_label(), "33.33");
    }

    #[test]
    fn test_coverage_percent_ties_round_to_even() {
        // 1/32 = 3.125% exactly, 不可進位成 3.13
        let plan = CoveragePlan {
            macro_territory: "Skincare".to_string(),
            territory: "x".to_string(),
            overall_queries: 32,
            covered_queries: 1,
            coverage_ratio: 1.0 / 32.0,
            maturity_tier: MaturityTier::Growth,
            gap_queries: 31,
            recommended_contents: 1,
            split: ContentSplit {
                text_contents: 1,
                media_contents: 0,
                text_fraction: 0.9,
                media_fraction: 0.1,
            },
        };
        assert_eq!(plan.coverage_percent_label(), "3.12");
        assert_eq!(plan.coverage_percent(), 3.12);
    }
}

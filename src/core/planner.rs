use crate::core::catalog::Catalog;
use crate::domain::model::{ContentSplit, CoveragePlan, MaturityTier};
use crate::domain::ports::TerritoryLookup;
use crate::utils::error::{PlannerError, Result};

/// Computes coverage plans against a territory catalog.
pub struct PlanCalculator<'a, L: TerritoryLookup = Catalog> {
    catalog: &'a L,
}

impl<'a, L: TerritoryLookup> PlanCalculator<'a, L> {
    pub fn new(catalog: &'a L) -> Self {
        Self { catalog }
    }

    /// Validates the counts, resolves the macro territory and derives the plan.
    ///
    /// `covered_queries` above `overall_queries` is clamped rather than rejected.
    pub fn calculate(
        &self,
        macro_territory: &str,
        territory: &str,
        overall_queries: i64,
        covered_queries: i64,
    ) -> Result<CoveragePlan> {
        if overall_queries <= 0 {
            return Err(PlannerError::invalid_argument("overall queries must be > 0"));
        }
        if covered_queries < 0 {
            return Err(PlannerError::invalid_argument("covered queries must be >= 0"));
        }

        // 兩者此時都非負，轉型不會失敗
        let overall = overall_queries.unsigned_abs();
        let mut covered = covered_queries.unsigned_abs();
        if covered > overall {
            tracing::debug!(
                "Clamping covered queries {} to overall queries {}",
                covered,
                overall
            );
            covered = overall;
        }

        let profile = self.catalog.resolve(macro_territory)?;

        let coverage_ratio = covered as f64 / overall as f64;
        let maturity_tier = MaturityTier::from_coverage(coverage_ratio);

        let gap_queries = overall.saturating_sub(covered);
        let recommended_contents = gap_queries.div_ceil(maturity_tier.queries_per_content());

        let text_contents = (recommended_contents as f64 * profile.text_fraction).ceil() as u64;
        // text_fraction <= 1 keeps text_contents <= recommended_contents
        let media_contents = recommended_contents.saturating_sub(text_contents);

        tracing::debug!(
            "Plan for {}/{}: coverage {:.4}, tier {}, gap {}, contents {} ({} text, {} media)",
            profile.name,
            territory.trim(),
            coverage_ratio,
            maturity_tier,
            gap_queries,
            recommended_contents,
            text_contents,
            media_contents
        );

        Ok(CoveragePlan {
            macro_territory: profile.name.clone(),
            territory: territory.trim().to_string(),
            overall_queries: overall,
            covered_queries: covered,
            coverage_ratio,
            maturity_tier,
            gap_queries,
            recommended_contents,
            split: ContentSplit {
                text_contents,
                media_contents,
                text_fraction: profile.text_fraction,
                media_fraction: profile.media_fraction,
            },
        })
    }
}

/// [`PlanCalculator::calculate`] against the built-in catalog.
pub fn calculate(
    macro_territory: &str,
    territory: &str,
    overall_queries: i64,
    covered_queries: i64,
) -> Result<CoveragePlan> {
    PlanCalculator::new(Catalog::builtin()).calculate(
        macro_territory,
        territory,
        overall_queries,
        covered_queries,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_plan() {
        let plan = calculate("Skincare", " anti-acne ", 100, 0).unwrap();
        assert_eq!(plan.macro_territory, "Skincare");
        assert_eq!(plan.territory, "anti-acne");
        assert_eq!(plan.maturity_tier, MaturityTier::Growth);
        assert_eq!(plan.gap_queries, 100);
        assert_eq!(plan.recommended_contents, 2);
        assert_eq!(plan.text_contents(), 2);
        assert_eq!(plan.media_contents(), 0);
    }

    #[test]
    fn test_ceiling_on_remainder() {
        let plan = calculate("Skincare", "x", 101, 0).unwrap();
        assert_eq!(plan.gap_queries, 101);
        assert_eq!(plan.recommended_contents, 3);
        assert_eq!(plan.text_contents(), 3);
        assert_eq!(plan.media_contents(), 0);
    }

    #[test]
    fn test_make_up_split() {
        // Growth: 250 / 50 = 5 contents, ceil(5 * 0.6) = 3
        let plan = calculate("Make Up", "lipstick", 250, 0).unwrap();
        assert_eq!(plan.recommended_contents, 5);
        assert_eq!(plan.text_contents(), 3);
        assert_eq!(plan.media_contents(), 2);
        assert_eq!(plan.split.text_fraction, 0.60);
        assert_eq!(plan.split.media_fraction, 0.40);
    }

    #[test]
    fn test_scale_and_maintenance_divisors() {
        let scale = calculate("Fragrance", "x", 1000, 500).unwrap();
        assert_eq!(scale.maturity_tier, MaturityTier::Scale);
        assert_eq!(scale.recommended_contents, 5);

        let maintenance = calculate("Fragrance", "x", 1000, 700).unwrap();
        assert_eq!(maintenance.maturity_tier, MaturityTier::Maintenance);
        assert_eq!(maintenance.recommended_contents, 2);
    }

    #[test]
    fn test_validation_order() {
        // overall 先檢查，即使 territory 也無效
        let err = calculate("Unknown", "x", 0, -1).unwrap_err();
        assert_eq!(err.to_string(), "overall queries must be > 0");

        let err = calculate("Unknown", "x", 10, -1).unwrap_err();
        assert_eq!(err.to_string(), "covered queries must be >= 0");

        let err = calculate("Unknown", "x", 10, 1).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidTerritory { .. }));
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::builder()
            .territory(crate::domain::model::TerritoryProfile::new("Haircare", 0.5, 0.5))
            .alias("hair", "Haircare")
            .build()
            .unwrap();
        let plan = PlanCalculator::new(&catalog)
            .calculate("HAIR", "shampoo", 150, 0)
            .unwrap();
        assert_eq!(plan.macro_territory, "Haircare");
        assert_eq!(plan.recommended_contents, 3);
        assert_eq!(plan.text_contents(), 2);
        assert_eq!(plan.media_contents(), 1);
    }
}

use crate::domain::model::{CoveragePlan, TerritoryProfile};
use crate::utils::error::Result;

/// Resolves user input to a macro-territory profile.
pub trait TerritoryLookup: Send + Sync {
    fn resolve(&self, name: &str) -> Result<&TerritoryProfile>;
}

/// Turns a finished plan into a report.
pub trait PlanRenderer {
    fn render(&self, plan: &CoveragePlan) -> String;
}

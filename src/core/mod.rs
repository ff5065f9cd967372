pub mod batch;
pub mod catalog;
pub mod formatter;
pub mod planner;

pub use crate::domain::model::{ContentSplit, CoveragePlan, MaturityTier, TerritoryProfile};
pub use crate::domain::ports::{PlanRenderer, TerritoryLookup};
pub use crate::utils::error::Result;

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::CatalogConfig;
pub use crate::core::{
    batch::{BatchPlanner, BatchRow, BatchSummary},
    catalog::Catalog,
    formatter::{format, render, OutputFormat},
    planner::{calculate, PlanCalculator},
};
pub use domain::model::{ContentSplit, CoveragePlan, MaturityTier, TerritoryProfile};
pub use utils::error::{PlannerError, Result};

use crate::core::planner::PlanCalculator;
use crate::domain::model::CoveragePlan;
use crate::domain::ports::TerritoryLookup;
use crate::utils::error::Result;
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchInput {
    pub macro_territory: String,
    pub territory: String,
    pub overall_queries: i64,
    pub covered_queries: i64,
}

/// One output row per input row; failed rows carry only the input and `error`.
/// Counts that could not be parsed are left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    pub macro_territory: String,
    pub territory: String,
    pub overall_queries: Option<i64>,
    pub covered_queries: Option<i64>,
    pub coverage_percent: Option<f64>,
    pub maturity_tier: Option<String>,
    pub gap_queries: Option<u64>,
    pub recommended_contents: Option<u64>,
    pub text_contents: Option<u64>,
    pub media_contents: Option<u64>,
    pub error: Option<String>,
}

impl BatchRow {
    fn from_plan(plan: &CoveragePlan) -> Self {
        Self {
            macro_territory: plan.macro_territory.clone(),
            territory: plan.territory.clone(),
            overall_queries: Some(plan.overall_queries as i64),
            covered_queries: Some(plan.covered_queries as i64),
            coverage_percent: Some(plan.coverage_percent()),
            maturity_tier: Some(plan.maturity_tier.to_string()),
            gap_queries: Some(plan.gap_queries),
            recommended_contents: Some(plan.recommended_contents),
            text_contents: Some(plan.text_contents()),
            media_contents: Some(plan.media_contents()),
            error: None,
        }
    }

    fn from_failure(input: BatchInput, message: String) -> Self {
        Self {
            macro_territory: input.macro_territory,
            territory: input.territory,
            overall_queries: Some(input.overall_queries),
            covered_queries: Some(input.covered_queries),
            error: Some(message),
            ..Default::default()
        }
    }

    /// 欄位無法解析時，盡量保留原始內容
    fn from_unparsed(headers: &StringRecord, record: &StringRecord, message: String) -> Self {
        let field = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| record.get(i))
        };
        Self {
            macro_territory: field("macro_territory").unwrap_or_default().to_string(),
            territory: field("territory").unwrap_or_default().to_string(),
            overall_queries: field("overall_queries").and_then(|v| v.parse().ok()),
            covered_queries: field("covered_queries").and_then(|v| v.parse().ok()),
            error: Some(message),
            ..Default::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub rows: Vec<BatchRow>,
    pub succeeded: usize,
    pub failed: usize,
}

pub struct BatchPlanner<'a, L: TerritoryLookup> {
    calculator: PlanCalculator<'a, L>,
}

impl<'a, L: TerritoryLookup> BatchPlanner<'a, L> {
    pub fn new(catalog: &'a L) -> Self {
        Self {
            calculator: PlanCalculator::new(catalog),
        }
    }

    /// Plans every row; a row that fails to parse or calculate is recorded,
    /// not fatal. Unreadable CSV (bad UTF-8, wrong field count) aborts the batch.
    pub fn run<R: Read>(&self, reader: R) -> Result<BatchSummary> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut record = StringRecord::new();
        let mut summary = BatchSummary::default();

        while csv_reader.read_record(&mut record)? {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let planned = record
                .deserialize::<BatchInput>(Some(&headers))
                .map_err(|e| (None, e.to_string()))
                .and_then(|input| {
                    self.calculator
                        .calculate(
                            &input.macro_territory,
                            &input.territory,
                            input.overall_queries,
                            input.covered_queries,
                        )
                        .map_err(|e| (Some(input), e.to_string()))
                });

            let row = match planned {
                Ok(plan) => {
                    summary.succeeded += 1;
                    BatchRow::from_plan(&plan)
                }
                Err((input, message)) => {
                    tracing::warn!("Line {} rejected: {}", line, message);
                    summary.failed += 1;
                    match input {
                        Some(input) => BatchRow::from_failure(input, message),
                        None => BatchRow::from_unparsed(&headers, &record, message),
                    }
                }
            };
            summary.rows.push(row);
        }

        tracing::info!(
            "Batch finished: {} planned, {} rejected",
            summary.succeeded,
            summary.failed
        );
        Ok(summary)
    }
}

pub fn write_rows<W: Write>(writer: W, rows: &[BatchRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

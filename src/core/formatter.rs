use crate::domain::model::CoveragePlan;
use crate::domain::ports::PlanRenderer;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

const TIER_LEGEND: [(&str, &str); 3] = [
    ("Maintenance", ">= 70%"),
    ("Scale", ">= 30% and < 70%"),
    ("Growth", "< 30%"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl PlanRenderer for MarkdownRenderer {
    fn render(&self, plan: &CoveragePlan) -> String {
        let mut out = String::new();
        out.push_str("### Results\n");
        out.push_str(&format!("**Macro Territory:** {}  \n", plan.macro_territory));
        out.push_str(&format!("**Territory:** {}\n\n", plan.territory));
        out.push_str(&format!(
            "**Coverage:** **{}%** → **Maturity: {}**\n",
            plan.coverage_percent_label(),
            plan.maturity_tier
        ));
        for (tier, range) in TIER_LEGEND {
            out.push_str(&format!("- **{}**: {}\n", tier, range));
        }
        out.push_str(&format!("\n**Query Gap:** {}\n\n", plan.gap_queries));
        out.push_str("### Recommended Contents\n");
        out.push_str(&format!(
            "Content Pieces: **{}**\n\n",
            plan.recommended_contents
        ));
        out.push_str("**Content Formats**\n");
        out.push_str(&format!(
            "- Articles: **{}** ({:.0}%)\n",
            plan.text_contents(),
            plan.split.text_fraction * 100.0
        ));
        out.push_str(&format!(
            "- Media Contents: **{}** ({:.0}%)\n",
            plan.media_contents(),
            plan.split.media_fraction * 100.0
        ));
        out
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl PlanRenderer for TextRenderer {
    fn render(&self, plan: &CoveragePlan) -> String {
        let legend = TIER_LEGEND
            .iter()
            .map(|(tier, range)| format!("{} {}", tier, range))
            .collect::<Vec<_>>()
            .join(", ");

        let lines = [
            format!("Macro Territory:  {}", plan.macro_territory),
            format!("Territory:        {}", plan.territory),
            format!(
                "Coverage:         {}% ({} of {} queries)",
                plan.coverage_percent_label(),
                plan.covered_queries,
                plan.overall_queries
            ),
            format!("Maturity:         {} ({})", plan.maturity_tier, legend),
            format!("Query Gap:        {}", plan.gap_queries),
            format!("Content Pieces:   {}", plan.recommended_contents),
            format!(
                "  Articles:       {} ({:.0}%)",
                plan.text_contents(),
                plan.split.text_fraction * 100.0
            ),
            format!(
                "  Media Contents: {} ({:.0}%)",
                plan.media_contents(),
                plan.split.media_fraction * 100.0
            ),
        ];
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Markdown report, the default rendering.
pub fn format(plan: &CoveragePlan) -> String {
    MarkdownRenderer.render(plan)
}

pub fn render_json(plan: &CoveragePlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

pub fn render(plan: &CoveragePlan, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Markdown => Ok(MarkdownRenderer.render(plan)),
        OutputFormat::Text => Ok(TextRenderer.render(plan)),
        OutputFormat::Json => render_json(plan),
    }
}

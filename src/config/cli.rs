use crate::core::formatter::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "coverage-planner", version)]
#[command(about = "Plan how many articles and media pieces a territory needs from its keyword coverage")]
pub struct CliConfig {
    /// TOML catalog of macro territories (defaults to the built-in catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Calculate the content plan for one territory
    Plan {
        /// Macro territory, e.g. "Skincare"
        #[arg(short, long)]
        macro_territory: String,

        /// Territory label, e.g. "anti-acne"
        #[arg(short, long, default_value = "")]
        territory: String,

        /// Overall keywords mapped for the territory
        #[arg(long, allow_negative_numbers = true)]
        overall: i64,

        /// Keywords already covered
        #[arg(long, allow_negative_numbers = true, default_value = "0")]
        covered: i64,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },
    /// Plan every row of a CSV file
    Batch {
        /// CSV with macro_territory,territory,overall_queries,covered_queries
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the catalog's macro territories
    Territories,
}

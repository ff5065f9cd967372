use clap::Parser;
use coverage_planner::core::batch::{self, BatchPlanner};
use coverage_planner::utils::error::PlannerError;
use coverage_planner::utils::logger;
use coverage_planner::{
    render, Catalog, CatalogConfig, CliConfig, Command, OutputFormat, PlanCalculator,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let catalog = match CatalogConfig::load_catalog(config.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = run(&config.command, &catalog) {
        exit_with(&e);
    }
}

fn run(command: &Command, catalog: &Catalog) -> coverage_planner::Result<()> {
    match command {
        Command::Plan {
            macro_territory,
            territory,
            overall,
            covered,
            format,
        } => {
            let plan = PlanCalculator::new(catalog).calculate(
                macro_territory,
                territory,
                *overall,
                *covered,
            )?;
            tracing::info!(
                "✅ {} / {}: {} contents recommended",
                plan.macro_territory,
                plan.territory,
                plan.recommended_contents
            );
            print!("{}", render(&plan, *format)?);
            if *format == OutputFormat::Json {
                println!();
            }
        }
        Command::Batch { input, output } => {
            tracing::info!("📁 Reading batch from: {}", input.display());
            let summary = BatchPlanner::new(catalog).run(File::open(input)?)?;

            match output {
                Some(path) => {
                    batch::write_rows(BufWriter::new(File::create(path)?), &summary.rows)?;
                    tracing::info!("📁 Output saved to: {}", path.display());
                }
                None => batch::write_rows(io::stdout().lock(), &summary.rows)?,
            }

            if summary.failed > 0 {
                eprintln!(
                    "⚠️  {} of {} rows could not be planned, see the error column",
                    summary.failed,
                    summary.rows.len()
                );
            }
        }
        Command::Territories => {
            let mut stdout = io::stdout().lock();
            for profile in catalog.profiles() {
                writeln!(
                    stdout,
                    "{}: {:.0}% articles, {:.0}% media",
                    profile.name,
                    profile.text_fraction * 100.0,
                    profile.media_fraction * 100.0
                )?;
            }
            for (alias, canonical) in catalog.aliases() {
                writeln!(stdout, "  alias '{}' -> {}", alias, canonical)?;
            }
        }
    }
    Ok(())
}

fn exit_with(e: &PlannerError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    // 錯誤訊息原樣輸出給使用者
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

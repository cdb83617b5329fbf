//! Revenue Upside CLI
//!
//! Command-line interface for running revenue projections

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use revenue_upside::display::{render_summary, render_table, ChartData};
use revenue_upside::scenario::{load_scenarios, rate_range, write_outcomes_csv, ScenarioOutcome};
use revenue_upside::{Calculator, CalculatorConfig, ScenarioRunner};

/// Exit status for rejected input
const EXIT_INVALID_INPUT: i32 = 2;

#[derive(Parser)]
#[command(
    name = "revenue-upside",
    version,
    about = "Project revenue five years ahead at a compound annual growth rate"
)]
struct Cli {
    /// JSON calculator config (default growth rate, export file name)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log progress at info level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project one starting revenue and print the table
    Project {
        /// Current revenue in dollars
        #[arg(long, allow_hyphen_values = true)]
        revenue: String,

        /// Annual growth rate in percent (defaults to the configured rate)
        #[arg(long, allow_hyphen_values = true)]
        growth_rate: Option<String>,

        /// Write the CSV export
        #[arg(long)]
        export: bool,

        /// Directory the CSV export is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Write the chart dataset as JSON to this path
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Project every scenario in a CSV file
    Batch {
        /// Scenario file (ScenarioID,StartingRevenue,GrowthRate)
        #[arg(long)]
        input: PathBuf,

        /// Summary CSV path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Project one starting revenue across a range of growth rates
    Sweep {
        #[arg(long)]
        revenue: f64,
        #[arg(long, default_value_t = 0.0)]
        from: f64,
        #[arg(long, default_value_t = 20.0)]
        to: f64,
        #[arg(long, default_value_t = 1.0)]
        step: f64,

        /// Summary CSV path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    match cli.command {
        Commands::Project {
            revenue,
            growth_rate,
            export,
            out_dir,
            chart,
        } => run_project(config, &revenue, growth_rate.as_deref(), export, &out_dir, chart),
        Commands::Batch { input, output } => {
            let scenarios = load_scenarios(&input)
                .with_context(|| format!("failed to load scenarios from {}", input.display()))?;
            let outcomes = ScenarioRunner::new().run_all(&scenarios);
            write_outcomes(&outcomes, output)
        }
        Commands::Sweep {
            revenue,
            from,
            to,
            step,
            output,
        } => {
            let rates = rate_range(from, to, step)?;
            let outcomes = ScenarioRunner::new().sweep(revenue, &rates);
            write_outcomes(&outcomes, output)
        }
    }
}

fn run_project(
    config: CalculatorConfig,
    revenue: &str,
    growth_rate: Option<&str>,
    export: bool,
    out_dir: &std::path::Path,
    chart: Option<PathBuf>,
) -> Result<()> {
    let mut calc = Calculator::new(config);
    calc.set_revenue_text(revenue);

    if let Some(text) = growth_rate {
        if let Err(e) = calc.growth_rate_mut().set_from_text(text) {
            eprintln!("{e}");
            std::process::exit(EXIT_INVALID_INPUT);
        }
    }

    let result = match calc.calculate() {
        Ok(result) => result.clone(),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(EXIT_INVALID_INPUT);
        }
    };

    println!("Revenue Upside Calculator");
    println!("=========================\n");
    println!("  Current Revenue: ${:.2}", result.input.starting_revenue);
    println!("  Annual Growth Rate: {}%\n", result.input.annual_growth_rate_percent);
    print!("{}", render_table(&result));
    println!();
    print!("{}", render_summary(&result.summary));

    if export {
        if let Some(path) = calc.export_to_dir(out_dir)? {
            println!("\nExport written to: {}", path.display());
        }
    }

    if let Some(path) = chart {
        ChartData::from_result(&result)
            .write_json(&path)
            .with_context(|| format!("failed to write chart data to {}", path.display()))?;
        println!("Chart data written to: {}", path.display());
    }

    Ok(())
}

fn write_outcomes(outcomes: &[ScenarioOutcome], output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_outcomes_csv(BufWriter::new(file), outcomes)?;
            println!("Results written to: {}", path.display());
        }
        None => write_outcomes_csv(io::stdout().lock(), outcomes)?,
    }
    Ok(())
}

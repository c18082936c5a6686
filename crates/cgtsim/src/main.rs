use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{WrapErr, bail};

use cgtsim::report::json::{AnalysisExport, write_json};
use cgtsim::report::svg;
use cgtsim::report::text::render_report;
use cgtsim::{
    AnalysisConfig, init_logging, load_inflation_xlsx, load_price_csv, run_yearly_sweeps,
    write_charts,
};
use cgtsim_core::{Histogram, SummaryStatistics, build_gain_records, yearly_summaries};

#[derive(Parser, Debug)]
#[command(name = "cgtsim")]
#[command(about = "Capital gains tax revenue analysis over historical dollar prices")]
struct Args {
    /// Path to the daily dollar price CSV
    #[arg(short, long)]
    prices: Option<PathBuf>,

    /// Path to the annual inflation XLSX workbook
    #[arg(short, long)]
    inflation: Option<PathBuf>,

    /// YAML configuration file; omitted fields keep the study defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the report, JSON export and charts
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// What to print to stdout; every artifact is written to the output
    /// directory either way
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print the default configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    if args.print_config {
        print!("{}", AnalysisConfig::default().to_yaml()?);
        return Ok(());
    }

    init_logging(&args.out_dir, &args.log_level)?;

    let config = match &args.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    let schedule = config.tax_schedule()?;

    let (Some(prices_path), Some(inflation_path)) = (&args.prices, &args.inflation) else {
        bail!("--prices and --inflation are required (see --print-config for the analysis knobs)");
    };

    let prices = load_price_csv(prices_path)?;
    let inflation = load_inflation_xlsx(inflation_path)?;
    tracing::info!(
        observations = prices.len(),
        inflation_years = inflation.len(),
        "Input data loaded"
    );

    let records = build_gain_records(&prices, &inflation, config.max_sale_gap_days);
    if records.is_empty() {
        bail!("No 12-month holding window could be priced from the inputs");
    }
    let summaries = yearly_summaries(&records);

    let real_gains: Vec<f64> = records.iter().filter_map(|r| r.real_gain).collect();
    let real_gain_stats = SummaryStatistics::from_values(&real_gains);
    let histogram = Histogram::from_values(&real_gains, config.histogram_bins);

    let sweeps = run_yearly_sweeps(&config, &schedule, &summaries)?;

    let report = render_report(
        &config,
        &schedule,
        &records,
        real_gain_stats.as_ref(),
        &summaries,
        &sweeps,
    );
    fs::write(args.out_dir.join("report.txt"), &report)
        .wrap_err("Failed to write report.txt")?;

    let export = AnalysisExport {
        records: &records,
        yearly_summaries: &summaries,
        real_gain_stats: real_gain_stats.as_ref(),
        sweeps: &sweeps,
    };
    write_json(&args.out_dir.join("analysis.json"), &export)?;

    match args.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&export)?),
    }

    let charts = [
        ("price_trend", svg::price_trend(&prices)),
        ("nominal_gain", svg::nominal_gain(&records)),
        (
            "real_gain_histogram",
            histogram
                .as_ref()
                .map(svg::real_gain_histogram)
                .unwrap_or_default(),
        ),
        ("buy_sell_comparison", svg::buy_sell_comparison(&records)),
        ("yearly_gains", svg::yearly_gains(&summaries)),
        ("revenue_by_year", svg::revenue_by_year(&sweeps)),
    ];
    write_charts(&args.out_dir, &charts)?;

    tracing::info!(
        records = records.len(),
        years = sweeps.len(),
        out_dir = %args.out_dir.display(),
        "Analysis complete"
    );

    Ok(())
}

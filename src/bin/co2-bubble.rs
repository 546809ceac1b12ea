use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use co2_bubble::models::AxisRange;
use co2_bubble::{chart, export, stats, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "co2-bubble",
    version,
    about = "Build an animated GDP vs CO2 bubble chart from a country-year table"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the chart (and optionally render a static snapshot of one year).
    Build(BuildArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Html,
    Json,
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// CSV with columns: Country Name, Continent, Year, GDP, CO2, Population
    #[arg(short, long)]
    input: PathBuf,
    /// Write the figure to this file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (html or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// GDP axis range as LO:HI (default: data extent, padded).
    #[arg(long)]
    gdp_range: Option<String>,
    /// CO2 axis range as LO:HI (default: data extent, padded).
    #[arg(long)]
    co2_range: Option<String>,
    /// Render one frame to the given path (.svg or .png).
    #[arg(long, requires = "year")]
    snapshot: Option<PathBuf>,
    /// Year of the frame rendered with --snapshot.
    #[arg(long)]
    year: Option<i32>,
    /// Width of the snapshot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the snapshot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Page title of the HTML output.
    #[arg(long, default_value = "GDP vs CO2 emissions")]
    title: String,
}

/// Multiplicative padding around the data extent when no range is given.
const RANGE_PAD: f64 = 1.25;

fn parse_range(s: &str) -> Option<AxisRange> {
    let (a, b) = s.split_once(':')?;
    let lo = a.trim().parse::<f64>().ok()?;
    let hi = b.trim().parse::<f64>().ok()?;
    Some((lo, hi))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
    }
}

fn cmd_build(args: BuildArgs) -> Result<()> {
    let points = storage::read_csv(&args.input)?;
    log::info!("loaded {} rows from {}", points.len(), args.input.display());

    let defaults = stats::default_ranges(&points, RANGE_PAD);
    let gdp_range = match &args.gdp_range {
        Some(s) => parse_range(s)
            .ok_or_else(|| anyhow::anyhow!("invalid --gdp-range, expected LO:HI"))?,
        None => defaults
            .map(|(g, _)| g)
            .ok_or_else(|| anyhow::anyhow!("no positive GDP values; pass --gdp-range"))?,
    };
    let co2_range = match &args.co2_range {
        Some(s) => parse_range(s)
            .ok_or_else(|| anyhow::anyhow!("invalid --co2-range, expected LO:HI"))?,
        None => defaults
            .map(|(_, c)| c)
            .ok_or_else(|| anyhow::anyhow!("no positive CO2 values; pass --co2-range"))?,
    };

    let fig = chart::build_chart(&points, gdp_range, co2_range);

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Html) => "html",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("html"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "html" | "htm" => export::save_html(&fig, path, &args.title)?,
            "json" => export::save_json(&fig, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!(
            "Wrote chart with {} frames to {}",
            fig.frames.len(),
            path.display()
        );
    }

    if let (Some(snapshot), Some(year)) = (args.snapshot.as_ref(), args.year) {
        export::render_frame(&fig, &year.to_string(), snapshot, args.width, args.height)?;
        eprintln!("Wrote {} snapshot to {}", year, snapshot.display());
    }

    Ok(())
}

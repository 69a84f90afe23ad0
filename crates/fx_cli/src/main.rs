use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fx_cli")]
#[command(about = "Xuankong flying-star chart generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a chart for a date and facing bearing
    Chart {
        /// Observation date, YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Facing bearing in degrees (0 = north, clockwise, below 360)
        #[arg(long)]
        facing: f64,

        /// Apply the Ti-Gua swap when the sitting palace qualifies
        #[arg(long)]
        ti_gua: bool,

        /// Apply the Fan-Gua inversion
        #[arg(long)]
        fan_gua: bool,

        /// Evaluation profile: standard or conservative
        #[arg(long, default_value = "standard")]
        profile: String,

        /// Sector-boundary tolerance in degrees
        #[arg(long)]
        tolerance: Option<f64>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn run_chart(
    date: &str,
    facing: f64,
    ti_gua: bool,
    fan_gua: bool,
    profile: &str,
    tolerance: Option<f64>,
    pretty: bool,
) -> Result<()> {
    let mut config = serde_json::json!({
        "apply_ti_gua": ti_gua,
        "apply_fan_gua": fan_gua,
        "evaluation_profile": profile,
    });
    if let Some(tolerance) = tolerance {
        config["boundary_tolerance_deg"] = serde_json::json!(tolerance);
    }

    let request = serde_json::json!({
        "schema_version": fx_core::SCHEMA_VERSION,
        "observed_at": date,
        "facing_degrees": facing,
        "config": config,
    });

    let response = fx_core::generate_chart_json(&request.to_string())
        .map_err(|e| anyhow!("chart generation failed: {e}"))?;

    if pretty {
        let value: serde_json::Value =
            serde_json::from_str(&response).context("engine returned malformed JSON")?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{response}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            facing,
            ti_gua,
            fan_gua,
            profile,
            tolerance,
            pretty,
        } => run_chart(&date, facing, ti_gua, fan_gua, &profile, tolerance, pretty),
    }
}

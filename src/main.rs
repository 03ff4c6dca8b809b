use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use traffic_judge::simulation;

#[derive(Parser)]
#[command(name = "traffic_judge")]
#[command(about = "Score a traffic-signaling submission against its dataset")]
struct Cli {
    /// Path to the dataset file; the submission is read from <input>.out.txt
    input: PathBuf,

    /// Write the report to <input>.insights.txt instead of printing it
    #[arg(long)]
    write: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let input = cli.input.display().to_string();
    let submission_path = format!("{input}.out.txt");

    let dataset = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read dataset file {input}"))?;
    let submission = fs::read_to_string(&submission_path)
        .with_context(|| format!("failed to read submission file {submission_path}"))?;

    let mut city = simulation::parse_dataset(&dataset)?;
    let stats = simulation::apply_schedule(&mut city, &submission)
        .context("submission failed validation")?;
    simulation::run(&mut city);

    let insights = simulation::aggregate(&city, &stats);
    let report = simulation::render(&insights);

    if cli.write {
        let report_path = format!("{input}.insights.txt");
        fs::write(&report_path, report)
            .with_context(|| format!("failed to write report to {report_path}"))?;
        println!("Report written to {report_path}");
    } else {
        print!("{report}");
    }

    Ok(())
}

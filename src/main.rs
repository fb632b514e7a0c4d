use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use rocket_apogee::cli::Args;
use rocket_apogee::config::MotorSource;
use rocket_apogee::io::{csv, json, report};
use rocket_apogee::sim;

fn main() -> Result<ExitCode> {
    // Default log level to "info"
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let args = Args::parse();
    let config = args.run_config().context("invalid configuration")?;

    match config.motor_source() {
        MotorSource::File(path) => {
            println!("SIMULATION WITH MOTOR FILE");
            println!("Loading motor from: {}", path.display());
        }
        MotorSource::Manual { .. } => println!("SIMULATION WITH MANUAL PARAMETERS"),
    }
    println!();

    let motor = config.load_motor().context("cannot load motor")?;
    let vehicle = config.build_vehicle(&motor);
    let result = sim::simulate(&vehicle, &motor, &config.simulation);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &motor, &vehicle, &result)?;
    out.flush()?;

    if let Some(path) = &args.csv {
        csv::write_series_file(path, &result.series)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote flight series to {}", path.display());
    }
    if let Some(path) = &args.json {
        let summary = json::RunSummary::new(&motor, &vehicle, &result);
        json::write_summary_file(path, &summary)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote summary to {}", path.display());
    }

    if !result.reached_apogee() {
        warn!("no apogee: {}", result.outcome);
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}

//! tetraview - view-angle exploration for a triangle's tilted side planes
//!
//! Sweeps the tilt lattice, classifies the view-angle grid and prints the
//! slice dump followed by the statistics to stdout. Logs go to stderr.

use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use tetraview::config::AppConfig;
use tetraview::report;
use tetraview_core::Exploration;

fn run(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let exploration = Exploration::run(config.to_params())?;

    let summary = exploration.summary();
    log::info!(
        "Cells: {} occupied allowable, {} unoccupied allowable, {} occupied unallowable, {} unoccupied unallowable",
        summary.counts.occupied_allowable,
        summary.counts.unoccupied_allowable,
        summary.counts.occupied_unallowable,
        summary.counts.unoccupied_unallowable,
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::write_report(&mut out, &exploration)?;
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    log::info!("Starting tetraview");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

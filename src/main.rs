use anyhow::Result;
use cities_to_sqlite::{cli::Cli, logging::init_logging, pipeline::run};
use std::time::Instant;
use tracing::info;

fn main() -> Result<()> {
    let config = Cli::parse_args().into_config();
    init_logging(&config.log_file)?;

    info!("Started program");
    let start = Instant::now();

    let summary = run(&config)?;

    let elapsed = start.elapsed();
    println!(
        "Loaded {} cities into {:?}; wrote {} countries without a megapolis to {:?} in {:.1}s",
        summary.rows_inserted,
        config.database,
        summary.countries.len(),
        config.output,
        elapsed.as_secs_f64()
    );

    Ok(())
}

use hamming_sim::cs::ecc::LinearCode;
use hamming_sim::math::monte_carlo::{write_csv, ExperimentConfig, ExperimentRunner};
use std::time::Instant;

const OUTPUT_PATH: &str = "output.csv";

fn main() -> Result<(), hamming_sim::Error> {
    tracing_subscriber::fmt::init();

    let start = Instant::now();
    let code = LinearCode::hamming_7_4()?;
    let runner = ExperimentRunner::new(&code, ExperimentConfig::default())?;
    let rows = runner.run()?;

    // A failed write loses this run's table but is not fatal
    match write_csv(OUTPUT_PATH, &rows) {
        Ok(()) => println!("Data has been written to {}", OUTPUT_PATH),
        Err(err) => log::error!("Could not write {}: {}", OUTPUT_PATH, err),
    }

    println!("Execution time: {} milliseconds", start.elapsed().as_millis());
    Ok(())
}

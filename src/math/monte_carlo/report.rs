//! CSV rendering of an experiment's result table.
//!
//! One header row `p,E,D`, then one row per probability: the probability as
//! configured and the pre- and post-decode error rates with eight digits
//! after the decimal point.

use crate::cs::ecc::Result;
use crate::math::monte_carlo::ber_experiment::ErrorRates;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Header row of the table
pub const HEADER: &str = "p,E,D";

/// Renders the full table, one `\n`-terminated line per row
pub fn render_csv(rows: &[ErrorRates]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + rows.len() * 32);
    out.push_str(HEADER);
    out.push('\n');
    for row in rows {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{},{:.8},{:.8}",
            row.probability,
            row.received_rate(),
            row.decoded_rate()
        );
    }
    out
}

/// Writes the rendered table to `path` in a single call
pub fn write_csv<P: AsRef<Path>>(path: P, rows: &[ErrorRates]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_csv(rows))?;
    log::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::ecc::LinearCode;
    use crate::cs::error::Error;
    use crate::math::monte_carlo::ber_experiment::{ExperimentConfig, ExperimentRunner};

    fn row(probability: f64, received_errors: u64, decoded_errors: u64) -> ErrorRates {
        ErrorRates {
            probability,
            received_errors,
            decoded_errors,
            num_of_bits: 1_000_000,
        }
    }

    #[test]
    fn test_render_csv() {
        let rows = [
            row(0.00001, 12, 0),
            row(0.05, 49_871, 13_952),
            row(0.5, 500_123, 499_870),
        ];
        assert_eq!(
            render_csv(&rows),
            "p,E,D\n\
             0.00001,0.00001200,0.00000000\n\
             0.05,0.04987100,0.01395200\n\
             0.5,0.50012300,0.49987000\n"
        );
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render_csv(&[]), "p,E,D\n");
    }

    #[test]
    fn test_same_seed_same_csv() {
        let code = LinearCode::hamming_7_4().unwrap();
        let config = ExperimentConfig::default()
            .with_iterations(1_000)
            .with_num_of_bits(4_000)
            .with_seed(2024);
        let first = ExperimentRunner::new(&code, config.clone())
            .unwrap()
            .run()
            .unwrap();
        let second = ExperimentRunner::new(&code, config).unwrap().run().unwrap();
        assert_eq!(render_csv(&first), render_csv(&second));
        assert_eq!(render_csv(&first).lines().count(), 12);
    }

    #[test]
    fn test_write_csv() {
        let path = std::env::temp_dir().join(format!(
            "hamming-sim-report-{}.csv",
            std::process::id()
        ));
        let rows = [row(0.1, 100_000, 50_000)];
        write_csv(&path, &rows).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(written, "p,E,D\n0.1,0.10000000,0.05000000\n");
    }

    #[test]
    fn test_write_csv_reports_io_error() {
        let path = std::env::temp_dir()
            .join("hamming-sim-missing-dir")
            .join("nested")
            .join("output.csv");
        assert!(matches!(write_csv(&path, &[]), Err(Error::Io(_))));
    }
}

pub mod monte_carlo;

pub use monte_carlo::{
    expected_error_rates, render_csv, write_csv, ErrorRates, ExperimentConfig, ExperimentRunner,
};

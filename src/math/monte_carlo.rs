pub mod ber_experiment;
pub mod report;
pub mod theory;

pub use ber_experiment::{
    ErrorRates, ExperimentConfig, ExperimentRunner, TrialCounts, TrialState, MESSAGE_BIAS,
    NUM_ITERATIONS, NUM_OF_BITS, PROBABILITIES,
};
pub use report::{render_csv, write_csv};
pub use theory::{expected_error_rates, ExpectedRates};

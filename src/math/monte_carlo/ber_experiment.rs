//! Monte-Carlo bit-error-rate experiment.
//!
//! For every crossover probability in the configuration the runner pushes
//! `iterations` random messages through encode, channel and decode, and
//! counts two kinds of bit errors:
//! - *received* errors, the message part of the noisy word against the
//!   original (parity bits are never counted), and
//! - *decoded* errors, the decoder output against the original.
//!
//! Both totals are divided by `num_of_bits`, a configured constant that is
//! not derived from the iteration count.
//!
//! Each probability runs on its own ChaCha20 stream of the configured seed,
//! so a row does not depend on the order in which rows are computed.

use crate::cs::ecc::{BitVector, ChannelSimulator, LinearCode, Result, SyndromeDecoder};
use crate::cs::error::Error;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Trials per crossover probability
pub const NUM_ITERATIONS: usize = 250_000;
/// Normalization constant for the accumulated error counts
pub const NUM_OF_BITS: u64 = 1_000_000;
/// Probability that a message bit is one
pub const MESSAGE_BIAS: f64 = 0.5;
/// Default seed of the run's random stream
pub const DEFAULT_SEED: u64 = 0x5EED_0074;
/// Crossover probabilities swept by default
pub const PROBABILITIES: [f64; 11] = [
    0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.2, 0.5,
];

/// Parameters of an experiment
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Trials per probability
    pub iterations: usize,
    /// Divisor applied to the error totals
    pub num_of_bits: u64,
    /// Probability that a generated message bit is one
    pub message_bias: f64,
    /// Crossover probabilities, reported in this order
    pub probabilities: Vec<f64>,
    /// Seed of the random stream
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            iterations: NUM_ITERATIONS,
            num_of_bits: NUM_OF_BITS,
            message_bias: MESSAGE_BIAS,
            probabilities: PROBABILITIES.to_vec(),
            seed: DEFAULT_SEED,
        }
    }
}

impl ExperimentConfig {
    /// Set the number of trials per probability
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the normalization constant
    pub fn with_num_of_bits(mut self, num_of_bits: u64) -> Self {
        self.num_of_bits = num_of_bits;
        self
    }

    /// Set the crossover probabilities
    pub fn with_probabilities(mut self, probabilities: &[f64]) -> Self {
        self.probabilities = probabilities.to_vec();
        self
    }

    /// Set the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Rejects configurations that cannot produce a table
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidInput(
                "Iteration count must be positive".to_string(),
            ));
        }
        if self.num_of_bits == 0 {
            return Err(Error::InvalidInput(
                "Bit normalization must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.message_bias) {
            return Err(Error::InvalidInput(format!(
                "Message bias must lie in [0, 1], got {}",
                self.message_bias
            )));
        }
        if let Some(p) = self
            .probabilities
            .iter()
            .find(|p| !(0.0..=1.0).contains(*p))
        {
            return Err(Error::InvalidInput(format!(
                "Crossover probability must lie in [0, 1], got {}",
                p
            )));
        }
        Ok(())
    }
}

/// Accumulated error counts for one crossover probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorRates {
    /// Crossover probability of the channel
    pub probability: f64,
    /// Message-bit errors in the received words
    pub received_errors: u64,
    /// Message-bit errors after decoding
    pub decoded_errors: u64,
    /// Divisor used for the rates
    pub num_of_bits: u64,
}

impl ErrorRates {
    /// Pre-decode error rate
    pub fn received_rate(&self) -> f64 {
        self.received_errors as f64 / self.num_of_bits as f64
    }

    /// Post-decode error rate
    pub fn decoded_rate(&self) -> f64 {
        self.decoded_errors as f64 / self.num_of_bits as f64
    }
}

/// Error counts of a single trial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialCounts {
    /// Message-bit errors before decoding
    pub received_errors: usize,
    /// Message-bit errors after decoding
    pub decoded_errors: usize,
}

/// Per-trial vectors, cleared and refilled on every iteration
#[derive(Debug, Clone)]
pub struct TrialState {
    original: BitVector,
    encoded: BitVector,
    received: BitVector,
    received_message: BitVector,
    syndrome: BitVector,
    decoded: BitVector,
}

impl TrialState {
    /// Allocates buffers sized for `code`
    pub fn new(code: &LinearCode) -> Self {
        let k = code.message_len();
        TrialState {
            original: BitVector::new(k),
            encoded: BitVector::new(code.codeword_len()),
            received: BitVector::new(code.codeword_len()),
            received_message: BitVector::new(k),
            syndrome: BitVector::new(code.parity_len()),
            decoded: BitVector::new(k),
        }
    }

    /// Zeroes every buffer in place
    pub fn clear_all(&mut self) {
        self.original.clear_all();
        self.encoded.clear_all();
        self.received.clear_all();
        self.received_message.clear_all();
        self.syndrome.clear_all();
        self.decoded.clear_all();
    }

    /// Message of the last trial
    pub fn original(&self) -> &BitVector {
        &self.original
    }

    /// Codeword of the last trial
    pub fn encoded(&self) -> &BitVector {
        &self.encoded
    }

    /// Channel output of the last trial
    pub fn received(&self) -> &BitVector {
        &self.received
    }
}

/// Sweeps the configured crossover probabilities for one code
#[derive(Debug, Clone)]
pub struct ExperimentRunner<'a> {
    code: &'a LinearCode,
    config: ExperimentConfig,
}

impl<'a> ExperimentRunner<'a> {
    /// Creates a runner after validating `config`
    pub fn new(code: &'a LinearCode, config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        Ok(ExperimentRunner { code, config })
    }

    /// The configuration in use
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs every probability and returns one row per value, in order
    pub fn run(&self) -> Result<Vec<ErrorRates>> {
        #[cfg(feature = "parallel")]
        let rows = self
            .config
            .probabilities
            .par_iter()
            .enumerate()
            .map(|(index, &probability)| self.run_probability(index, probability))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(not(feature = "parallel"))]
        let rows = self
            .config
            .probabilities
            .iter()
            .enumerate()
            .map(|(index, &probability)| self.run_probability(index, probability))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "Simulated {} crossover probabilities with {} trials each",
            rows.len(),
            self.config.iterations
        );
        Ok(rows)
    }

    /// Runs all trials for the probability at position `index`
    pub fn run_probability(&self, index: usize, probability: f64) -> Result<ErrorRates> {
        let mut rng = ChaCha20Rng::seed_from_u64(self.config.seed);
        rng.set_stream(index as u64);

        let mut state = TrialState::new(self.code);
        let mut received_errors = 0u64;
        let mut decoded_errors = 0u64;
        for _ in 0..self.config.iterations {
            let counts = self.run_trial(probability, &mut rng, &mut state)?;
            received_errors += counts.received_errors as u64;
            decoded_errors += counts.decoded_errors as u64;
        }

        let rates = ErrorRates {
            probability,
            received_errors,
            decoded_errors,
            num_of_bits: self.config.num_of_bits,
        };
        log::debug!(
            "p={}: {} received errors, {} decoded errors",
            probability,
            received_errors,
            decoded_errors
        );
        Ok(rates)
    }

    /// Generates, encodes, transmits and decodes one message
    pub fn run_trial<R: Rng + ?Sized>(
        &self,
        probability: f64,
        rng: &mut R,
        state: &mut TrialState,
    ) -> Result<TrialCounts> {
        let channel = ChannelSimulator::new(self.code);
        let decoder = SyndromeDecoder::new(self.code);
        let k = self.code.message_len();
        let n = self.code.codeword_len();

        state.clear_all();
        channel.generate_message_into(self.config.message_bias, k, rng, &mut state.original)?;
        channel.encode_into(&state.original, &mut state.encoded)?;
        channel.transmit_into(&state.encoded, probability, n, rng, &mut state.received)?;

        state
            .received
            .slice_into(0, k, &mut state.received_message)?;
        state.received_message.xor(&state.original)?;
        let received_errors = state.received_message.cardinality();

        decoder.decode_into(&state.received, &mut state.syndrome, &mut state.decoded)?;
        state.decoded.xor(&state.original)?;
        let decoded_errors = state.decoded.cardinality();

        Ok(TrialCounts {
            received_errors,
            decoded_errors,
        })
    }
}

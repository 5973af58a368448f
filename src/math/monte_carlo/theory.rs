//! Exact expected error rates of a code over a binary symmetric channel.
//!
//! Syndrome decoding only depends on the error pattern, so it is enough to
//! push every pattern `e` of weight `w` through the decoder as if the zero
//! codeword had been sent, weighting it by `p^w (1-p)^(n-w)`.

use crate::cs::ecc::{BitVector, LinearCode, Result, SyndromeDecoder};
use crate::cs::error::Error;

/// Longest codeword enumerated exhaustively
const MAX_ENUMERATED_LEN: usize = 20;

/// Expected per-message-bit error rates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedRates {
    /// Before decoding
    pub received_rate: f64,
    /// After decoding
    pub decoded_rate: f64,
}

/// Computes the exact expected rates for crossover probability `probability`
pub fn expected_error_rates(code: &LinearCode, probability: f64) -> Result<ExpectedRates> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(Error::InvalidInput(format!(
            "Crossover probability must lie in [0, 1], got {}",
            probability
        )));
    }
    let n = code.codeword_len();
    if n > MAX_ENUMERATED_LEN {
        return Err(Error::InvalidInput(format!(
            "Codeword length {} is too long to enumerate",
            n
        )));
    }

    let k = code.message_len();
    let decoder = SyndromeDecoder::new(code);
    let mut pattern = BitVector::new(n);
    let mut received_rate = 0.0;
    let mut decoded_rate = 0.0;

    for value in 0u32..(1 << n) {
        pattern.clear_all();
        for position in (0..n).filter(|&position| value & (1 << position) != 0) {
            pattern.set(position)?;
        }
        let weight = value.count_ones() as i32;
        let likelihood = probability.powi(weight) * (1.0 - probability).powi(n as i32 - weight);

        let message_errors = pattern.slice(0, k)?.cardinality();
        let decoded_errors = decoder.decode(&pattern)?.cardinality();
        received_rate += likelihood * message_errors as f64;
        decoded_rate += likelihood * decoded_errors as f64;
    }

    Ok(ExpectedRates {
        received_rate: received_rate / k as f64,
        decoded_rate: decoded_rate / k as f64,
    })
}

//! Message source and binary symmetric channel.
//!
//! Every random decision draws a fresh uniform value in `[0, 1)` from the
//! injected generator and compares it against a threshold, one draw per
//! bit. The generator is always passed in by the caller so runs can be
//! replayed from a seed.

use crate::cs::ecc::{BitVector, LinearCode, Result};
use crate::cs::error::Error;
use rand::Rng;

/// Drives messages through encoding and a noisy channel for one code
#[derive(Debug, Clone, Copy)]
pub struct ChannelSimulator<'a> {
    code: &'a LinearCode,
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::InvalidInput(format!(
            "{} must lie in [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

impl<'a> ChannelSimulator<'a> {
    /// Creates a simulator for `code`
    pub fn new(code: &'a LinearCode) -> Self {
        ChannelSimulator { code }
    }

    /// Draws a random message of `length` bits, each set with probability `bias`
    pub fn generate_message<R: Rng + ?Sized>(
        &self,
        bias: f64,
        length: usize,
        rng: &mut R,
    ) -> Result<BitVector> {
        let mut message = BitVector::new(length);
        self.generate_message_into(bias, length, rng, &mut message)?;
        Ok(message)
    }

    /// Clears `out` and refills its first `length` bits at random
    pub fn generate_message_into<R: Rng + ?Sized>(
        &self,
        bias: f64,
        length: usize,
        rng: &mut R,
        out: &mut BitVector,
    ) -> Result<()> {
        check_probability("Message bias", bias)?;
        out.clear_all();
        for index in 0..length {
            if rng.gen::<f64>() < bias {
                out.set(index)?;
            }
        }
        Ok(())
    }

    /// Encodes a message with the code's generator matrix
    pub fn encode(&self, message: &BitVector) -> Result<BitVector> {
        let mut encoded = BitVector::new(self.code.codeword_len());
        self.encode_into(message, &mut encoded)?;
        Ok(encoded)
    }

    /// Encodes into an existing `n`-bit vector
    pub fn encode_into(&self, message: &BitVector, out: &mut BitVector) -> Result<()> {
        self.code.encode_into(message, out)
    }

    /// Sends `encoded` through the channel, flipping each of the first
    /// `length` bits independently with probability `flip_probability`
    pub fn transmit<R: Rng + ?Sized>(
        &self,
        encoded: &BitVector,
        flip_probability: f64,
        length: usize,
        rng: &mut R,
    ) -> Result<BitVector> {
        let mut received = BitVector::new(encoded.capacity());
        self.transmit_into(encoded, flip_probability, length, rng, &mut received)?;
        Ok(received)
    }

    /// Same as [`ChannelSimulator::transmit`], reusing `out`
    pub fn transmit_into<R: Rng + ?Sized>(
        &self,
        encoded: &BitVector,
        flip_probability: f64,
        length: usize,
        rng: &mut R,
        out: &mut BitVector,
    ) -> Result<()> {
        check_probability("Crossover probability", flip_probability)?;
        out.assign(encoded);
        for index in 0..length {
            if rng.gen::<f64>() < flip_probability {
                out.flip(index)?;
            }
        }
        Ok(())
    }
}

//! Single-error-correcting syndrome decoder.
//!
//! The syndrome of the received word is looked up against the rows of the
//! parity-check matrix. On an exact match the indicated bit is flipped;
//! otherwise the word is passed through unchanged. Because the code is
//! systematic the message is the first `k` bits of the corrected word.
//!
//! Patterns with two or more flipped bits either leave a syndrome that
//! matches no row, or match the wrong row and get miscorrected. Both are
//! inherent to single-error correction and are not reported as errors.

use crate::cs::ecc::{BitVector, LinearCode, Result};
use crate::cs::error::Error;

/// Decoder borrowing a code's parity-check matrix
#[derive(Debug, Clone, Copy)]
pub struct SyndromeDecoder<'a> {
    code: &'a LinearCode,
}

impl<'a> SyndromeDecoder<'a> {
    /// Creates a decoder for `code`
    pub fn new(code: &'a LinearCode) -> Self {
        SyndromeDecoder { code }
    }

    fn check_received(&self, received: &BitVector) -> Result<()> {
        if received.capacity() != self.code.codeword_len() {
            return Err(Error::InvalidInput(format!(
                "Received word has {} bits, expected {}",
                received.capacity(),
                self.code.codeword_len()
            )));
        }
        Ok(())
    }

    /// Returns the corrected codeword and the position that was flipped, if any
    pub fn correct(&self, received: &BitVector) -> Result<(BitVector, Option<usize>)> {
        self.check_received(received)?;
        let syndrome = self.code.syndrome(received)?;
        let position = self.code.locate_error(&syndrome)?;

        let mut corrected = received.clone();
        if let Some(position) = position {
            corrected.flip(position)?;
        }
        Ok((corrected, position))
    }

    /// Decodes a received word into its `k` message bits
    pub fn decode(&self, received: &BitVector) -> Result<BitVector> {
        let (corrected, _) = self.correct(received)?;
        corrected.slice(0, self.code.message_len())
    }

    /// Decodes into caller-owned buffers.
    ///
    /// `syndrome` must hold `m` bits and `decoded` `k` bits. Returns the
    /// corrected position, if any.
    pub fn decode_into(
        &self,
        received: &BitVector,
        syndrome: &mut BitVector,
        decoded: &mut BitVector,
    ) -> Result<Option<usize>> {
        self.check_received(received)?;
        self.code.syndrome_into(received, syndrome)?;
        let position = self.code.locate_error(syndrome)?;

        let message_len = self.code.message_len();
        received.slice_into(0, message_len, decoded)?;
        // Parity positions are dropped by the truncation anyway
        if let Some(position) = position.filter(|&position| position < message_len) {
            decoded.flip(position)?;
        }
        Ok(position)
    }
}

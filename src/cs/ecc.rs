//! Linear block error correction over GF(2).
//!
//! This module provides the pieces needed to push messages through a
//! systematic linear block code:
//! - [`BitVector`], a fixed-capacity bit container
//! - [`LinearCode`], generator and parity-check matrices with GF(2) products
//! - [`SyndromeDecoder`], single-error correction by syndrome lookup
//! - [`ChannelSimulator`], random messages and a binary symmetric channel
//!
//! # Examples
//!
//! ```rust
//! use hamming_sim::cs::ecc::{BitVector, BlockCode, LinearCode};
//!
//! let code = LinearCode::hamming_7_4()?;
//! let message = BitVector::from_bits(&[true, false, true, true]);
//! let mut received = code.encode(&message)?;
//! received.flip(2)?;
//! assert_eq!(code.decode(&received)?, message);
//! # Ok::<(), hamming_sim::cs::error::Error>(())
//! ```

use crate::cs::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for block code implementations
pub trait BlockCode {
    /// Map a message onto a codeword
    fn encode(&self, message: &BitVector) -> Result<BitVector>;

    /// Recover the message from a possibly corrupted codeword
    fn decode(&self, received: &BitVector) -> Result<BitVector>;
}

pub mod bit_vector;
pub mod channel;
pub mod decoder;
pub mod linear_code;

pub use bit_vector::BitVector;
pub use channel::ChannelSimulator;
pub use decoder::SyndromeDecoder;
pub use linear_code::LinearCode;

//! Error type shared by the coding and simulation modules.

use std::io;
use thiserror::Error;

/// Errors produced by bit-vector, code and experiment operations
#[derive(Error, Debug)]
pub enum Error {
    /// A bit index fell outside the declared capacity of a vector
    #[error("bit index {index} out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Declared capacity of the vector
        capacity: usize,
    },

    /// Arguments that can never describe a valid operation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The result artifact could not be created or written
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

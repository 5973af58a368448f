//! Systematic linear block code over GF(2).
//!
//! A code is described by two matrices stored as arrays of row vectors:
//! - the generator `G` with one row per message bit and one column per
//!   codeword bit, and
//! - the parity-check matrix `H` with one row per codeword bit and one
//!   column per parity check.
//!
//! Encoding is the GF(2) product `m·G` and the syndrome of a received word
//! `r` is `r·H`. A non-zero syndrome equal to row `i` of `H` identifies a
//! single flipped bit at position `i`.
//!
//! The standard (7,4) Hamming code is provided by [`LinearCode::hamming_7_4`].
//! Its generator carries the identity in the first four columns, so the
//! first four codeword bits are the message itself.

use crate::cs::ecc::decoder::SyndromeDecoder;
use crate::cs::ecc::{BitVector, BlockCode, Result};
use crate::cs::error::Error;

/// Ones of the (7,4) Hamming generator as `(message bit, codeword bit)`
pub const HAMMING_GENERATOR_ONES: [(usize, usize); 13] = [
    (0, 0),
    (1, 1),
    (2, 2),
    (3, 3),
    (0, 4),
    (1, 4),
    (2, 4),
    (0, 5),
    (2, 5),
    (3, 5),
    (0, 6),
    (1, 6),
    (3, 6),
];

/// Ones of the (7,4) Hamming parity-check matrix as `(codeword bit, syndrome bit)`
pub const HAMMING_PARITY_CHECK_ONES: [(usize, usize); 12] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (4, 0),
    (0, 1),
    (2, 1),
    (3, 1),
    (5, 1),
    (0, 2),
    (1, 2),
    (3, 2),
    (6, 2),
];

/// Generator and parity-check matrices of a linear block code.
///
/// Both matrices are fixed at construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct LinearCode {
    /// Message length `k`
    message_len: usize,
    /// Number of parity checks `m`
    parity_len: usize,
    /// `k` rows of `n` bits
    generator: Vec<BitVector>,
    /// `n` rows of `m` bits
    parity_check: Vec<BitVector>,
}

impl LinearCode {
    /// Builds a code from the coordinates of the ones in `G` and `H`.
    ///
    /// # Arguments
    ///
    /// * `message_len` - Number of message bits `k` (rows of `G`)
    /// * `parity_len` - Number of parity bits `m` (columns of `H`)
    /// * `generator_ones` - `(row, column)` pairs set in `G`
    /// * `parity_check_ones` - `(row, column)` pairs set in `H`
    ///
    /// # Returns
    ///
    /// The code, or [`Error::IndexOutOfRange`] if a coordinate does not fit
    /// the declared dimensions.
    pub fn new(
        message_len: usize,
        parity_len: usize,
        generator_ones: &[(usize, usize)],
        parity_check_ones: &[(usize, usize)],
    ) -> Result<Self> {
        if message_len == 0 || parity_len == 0 {
            return Err(Error::InvalidInput(
                "Message and parity lengths must be positive".to_string(),
            ));
        }

        let codeword_len = message_len + parity_len;
        let mut generator = vec![BitVector::new(codeword_len); message_len];
        let mut parity_check = vec![BitVector::new(parity_len); codeword_len];

        set_ones(&mut generator, generator_ones)?;
        set_ones(&mut parity_check, parity_check_ones)?;

        Ok(LinearCode {
            message_len,
            parity_len,
            generator,
            parity_check,
        })
    }

    /// Builds the systematic Hamming construction with `rows` message bits
    /// and `cols` parity bits.
    ///
    /// Only `(4, 3)` holds every coordinate; smaller dimensions fail with
    /// [`Error::IndexOutOfRange`].
    pub fn hamming(rows: usize, cols: usize) -> Result<Self> {
        Self::new(
            rows,
            cols,
            &HAMMING_GENERATOR_ONES,
            &HAMMING_PARITY_CHECK_ONES,
        )
    }

    /// Creates the standard (7,4) Hamming code
    pub fn hamming_7_4() -> Result<Self> {
        Self::hamming(4, 3)
    }

    /// Message length `k`
    pub fn message_len(&self) -> usize {
        self.message_len
    }

    /// Number of parity bits `m`
    pub fn parity_len(&self) -> usize {
        self.parity_len
    }

    /// Codeword length `n = k + m`
    pub fn codeword_len(&self) -> usize {
        self.message_len + self.parity_len
    }

    /// Rows of the generator matrix
    pub fn generator(&self) -> &[BitVector] {
        &self.generator
    }

    /// Rows of the parity-check matrix
    pub fn parity_check(&self) -> &[BitVector] {
        &self.parity_check
    }

    /// GF(2) product of a row vector with a matrix.
    ///
    /// Output bit `c` is the parity of the input bits `j < num_rows` for
    /// which `matrix[j]` has column `c` set.
    pub fn multiply(
        num_rows: usize,
        num_cols: usize,
        input: &BitVector,
        matrix: &[BitVector],
    ) -> Result<BitVector> {
        let mut out = BitVector::new(num_cols);
        Self::multiply_into(num_rows, num_cols, input, matrix, &mut out)?;
        Ok(out)
    }

    /// Same as [`LinearCode::multiply`], writing into an existing vector
    pub fn multiply_into(
        num_rows: usize,
        num_cols: usize,
        input: &BitVector,
        matrix: &[BitVector],
        out: &mut BitVector,
    ) -> Result<()> {
        if matrix.len() < num_rows {
            return Err(Error::InvalidInput(format!(
                "Matrix has {} rows, product needs {}",
                matrix.len(),
                num_rows
            )));
        }

        out.clear_all();
        let mut selected = BitVector::new(num_rows);
        for column in 0..num_cols {
            selected.clear_all();
            for (row, entries) in matrix.iter().take(num_rows).enumerate() {
                if entries.get(column)? {
                    selected.set(row)?;
                }
            }
            selected.and(input);
            if selected.cardinality() % 2 == 1 {
                out.set(column)?;
            }
        }
        Ok(())
    }

    /// Encodes a `k`-bit message into `out` (`n` bits)
    pub fn encode_into(&self, message: &BitVector, out: &mut BitVector) -> Result<()> {
        Self::multiply_into(
            self.message_len,
            self.codeword_len(),
            message,
            &self.generator,
            out,
        )
    }

    /// Computes the `m`-bit syndrome of a received word
    pub fn syndrome(&self, received: &BitVector) -> Result<BitVector> {
        let mut out = BitVector::new(self.parity_len);
        self.syndrome_into(received, &mut out)?;
        Ok(out)
    }

    /// Computes the syndrome of `received` into `out`
    pub fn syndrome_into(&self, received: &BitVector, out: &mut BitVector) -> Result<()> {
        Self::multiply_into(
            self.codeword_len(),
            self.parity_len,
            received,
            &self.parity_check,
            out,
        )
    }

    /// Maps a syndrome to the single codeword bit it points at.
    ///
    /// Returns the first row of `H` that matches the syndrome exactly, or
    /// `None` when no single-bit error explains it. The zero syndrome is
    /// always `None`.
    pub fn locate_error(&self, syndrome: &BitVector) -> Result<Option<usize>> {
        if syndrome.is_zero() {
            return Ok(None);
        }

        let mut pattern = BitVector::new(self.parity_len);
        for (position, row) in self.parity_check.iter().enumerate() {
            pattern.clear_all();
            for column in 0..self.parity_len {
                if row.get(column)? {
                    pattern.set(column)?;
                }
            }
            if pattern == *syndrome {
                return Ok(Some(position));
            }
        }
        Ok(None)
    }
}

fn set_ones(matrix: &mut [BitVector], ones: &[(usize, usize)]) -> Result<()> {
    let rows = matrix.len();
    for &(row, column) in ones {
        matrix
            .get_mut(row)
            .ok_or(Error::IndexOutOfRange {
                index: row,
                capacity: rows,
            })?
            .set(column)?;
    }
    Ok(())
}

impl BlockCode for LinearCode {
    fn encode(&self, message: &BitVector) -> Result<BitVector> {
        let mut out = BitVector::new(self.codeword_len());
        self.encode_into(message, &mut out)?;
        Ok(out)
    }

    fn decode(&self, received: &BitVector) -> Result<BitVector> {
        SyndromeDecoder::new(self).decode(received)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_from_value(value: usize) -> BitVector {
        BitVector::from_bits(&[
            value & 1 != 0,
            value & 2 != 0,
            value & 4 != 0,
            value & 8 != 0,
        ])
    }

    #[test]
    fn test_hamming_dimensions() {
        let code = LinearCode::hamming_7_4().unwrap();
        assert_eq!(code.message_len(), 4);
        assert_eq!(code.parity_len(), 3);
        assert_eq!(code.codeword_len(), 7);
        assert_eq!(code.generator().len(), 4);
        assert_eq!(code.parity_check().len(), 7);
        assert!(code.generator().iter().all(|row| row.capacity() == 7));
        assert!(code.parity_check().iter().all(|row| row.capacity() == 3));
    }

    #[test]
    fn test_hamming_matrices() {
        let code = LinearCode::hamming_7_4().unwrap();
        let generator: Vec<String> = code.generator().iter().map(|r| r.to_string()).collect();
        assert_eq!(generator, vec!["1000111", "0100101", "0010110", "0001011"]);

        let parity_check: Vec<String> =
            code.parity_check().iter().map(|r| r.to_string()).collect();
        assert_eq!(
            parity_check,
            vec!["111", "101", "110", "011", "100", "010", "001"]
        );
    }

    #[test]
    fn test_hamming_rejects_small_dimensions() {
        assert!(matches!(
            LinearCode::hamming(3, 3),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            LinearCode::hamming(4, 2),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            LinearCode::new(0, 3, &[], &[]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_multiply_parity() {
        // Single column matrix selecting rows 0, 1 and 3
        let matrix = vec![
            BitVector::from_bits(&[true]),
            BitVector::from_bits(&[true]),
            BitVector::from_bits(&[false]),
            BitVector::from_bits(&[true]),
        ];

        for value in 0..16 {
            let input = message_from_value(value);
            let weight = (value & 0b1011).count_ones();
            let product = LinearCode::multiply(4, 1, &input, &matrix).unwrap();
            assert_eq!(product.capacity(), 1);
            assert_eq!(product.get(0).unwrap(), weight % 2 == 1, "input {}", input);
        }
    }

    #[test]
    fn test_multiply_zero_input() {
        let code = LinearCode::hamming_7_4().unwrap();
        let product = LinearCode::multiply(4, 7, &BitVector::new(4), code.generator()).unwrap();
        assert!(product.is_zero());
    }

    #[test]
    fn test_multiply_rejects_short_matrix() {
        let matrix = vec![BitVector::new(3); 2];
        assert!(matches!(
            LinearCode::multiply(4, 3, &BitVector::new(4), &matrix),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_encode_known_message() {
        let code = LinearCode::hamming_7_4().unwrap();
        let message = BitVector::from_bits(&[true, false, true, true]);
        let codeword = code.encode(&message).unwrap();
        assert_eq!(codeword.capacity(), 7);
        assert_eq!(codeword.to_string(), "1011010");
    }

    #[test]
    fn test_encode_is_systematic() {
        let code = LinearCode::hamming_7_4().unwrap();
        for value in 0..16 {
            let message = message_from_value(value);
            let codeword = code.encode(&message).unwrap();
            assert_eq!(codeword.slice(0, 4).unwrap(), message);
        }
    }

    #[test]
    fn test_codewords_have_zero_syndrome() {
        let code = LinearCode::hamming_7_4().unwrap();
        for value in 0..16 {
            let codeword = code.encode(&message_from_value(value)).unwrap();
            let syndrome = code.syndrome(&codeword).unwrap();
            assert!(syndrome.is_zero(), "codeword {}", codeword);
            assert_eq!(code.locate_error(&syndrome).unwrap(), None);
        }
    }

    #[test]
    fn test_locate_known_error() {
        let code = LinearCode::hamming_7_4().unwrap();
        let received = BitVector::from_bits(&[true, false, false, true, false, true, false]);
        let syndrome = code.syndrome(&received).unwrap();
        assert_eq!(syndrome.to_string(), "110");
        assert_eq!(code.locate_error(&syndrome).unwrap(), Some(2));
    }

    #[test]
    fn test_locate_every_single_error() {
        let code = LinearCode::hamming_7_4().unwrap();
        let codeword = code
            .encode(&BitVector::from_bits(&[false, true, true, false]))
            .unwrap();
        for position in 0..7 {
            let mut received = codeword.clone();
            received.flip(position).unwrap();
            let syndrome = code.syndrome(&received).unwrap();
            assert_eq!(code.locate_error(&syndrome).unwrap(), Some(position));
        }
    }

    #[test]
    fn test_syndrome_into_overwrites_previous_contents() {
        let code = LinearCode::hamming_7_4().unwrap();
        let mut syndrome = BitVector::from_bits(&[true, true, true]);
        let codeword = code.encode(&message_from_value(9)).unwrap();
        code.syndrome_into(&codeword, &mut syndrome).unwrap();
        assert!(syndrome.is_zero());
    }
}

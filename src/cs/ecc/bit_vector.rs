//! Fixed-capacity bit vector.
//!
//! A thin wrapper over a `bitvec` buffer whose length is fixed when the
//! vector is created. Index 0 is the first (least significant) bit. Every
//! access outside `[0, capacity)` fails with [`Error::IndexOutOfRange`]
//! instead of growing the buffer.
//!
//! Equality only looks at which positions are set, so a 4-bit and a 7-bit
//! vector holding the same ones compare equal.

use crate::cs::ecc::Result;
use crate::cs::error::Error;
use bitvec::prelude::*;
use std::fmt::{Display, Formatter};

/// Bit container with a capacity declared at construction
#[derive(Debug, Clone)]
pub struct BitVector {
    bits: BitVec<usize, Lsb0>,
}

impl BitVector {
    /// Creates an all-zero vector of `capacity` bits
    pub fn new(capacity: usize) -> Self {
        BitVector {
            bits: bitvec![usize, Lsb0; 0; capacity],
        }
    }

    /// Creates a vector whose capacity and contents are taken from `bits`
    pub fn from_bits(bits: &[bool]) -> Self {
        BitVector {
            bits: bits.iter().copied().collect(),
        }
    }

    /// Number of addressable bits
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    fn check(&self, index: usize) -> Result<()> {
        if index >= self.capacity() {
            return Err(Error::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// Reads bit `index`, treating positions past the capacity as zero
    fn bit_or_zero(&self, index: usize) -> bool {
        matches!(self.bits.get(index), Some(bit) if *bit)
    }

    /// Sets bit `index` to one
    pub fn set(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        self.bits.set(index, true);
        Ok(())
    }

    /// Sets bit `index` to zero
    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        self.bits.set(index, false);
        Ok(())
    }

    /// Inverts bit `index`
    pub fn flip(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        let current = self.bits[index];
        self.bits.set(index, !current);
        Ok(())
    }

    /// Returns bit `index`
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check(index)?;
        Ok(self.bits[index])
    }

    /// Zeroes every bit without touching the allocation
    pub fn clear_all(&mut self) {
        self.bits.fill(false);
    }

    /// True when no bit is set
    pub fn is_zero(&self) -> bool {
        self.bits.not_any()
    }

    /// In-place logical AND.
    ///
    /// Positions that `other` does not have are treated as zero, so the
    /// result only keeps ones present in both vectors.
    pub fn and(&mut self, other: &BitVector) {
        for index in 0..self.capacity() {
            if self.bits[index] && !other.bit_or_zero(index) {
                self.bits.set(index, false);
            }
        }
    }

    /// In-place logical XOR.
    ///
    /// Fails without modifying `self` if `other` has a one past this
    /// vector's capacity.
    pub fn xor(&mut self, other: &BitVector) -> Result<()> {
        let capacity = self.capacity();
        if let Some(index) = other.iter_ones().find(|&index| index >= capacity) {
            return Err(Error::IndexOutOfRange { index, capacity });
        }
        for index in other.iter_ones() {
            let current = self.bits[index];
            self.bits.set(index, !current);
        }
        Ok(())
    }

    /// Population count
    pub fn cardinality(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterates over the positions of set bits in ascending order
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Copies bits `lo..hi` into a new vector of capacity `hi - lo`
    pub fn slice(&self, lo: usize, hi: usize) -> Result<BitVector> {
        let mut out = BitVector::new(hi.saturating_sub(lo));
        self.slice_into(lo, hi, &mut out)?;
        Ok(out)
    }

    /// Copies bits `lo..hi` into `out`, whose capacity must be `hi - lo`
    pub fn slice_into(&self, lo: usize, hi: usize, out: &mut BitVector) -> Result<()> {
        if lo > hi {
            return Err(Error::InvalidInput(format!(
                "slice start {} is past slice end {}",
                lo, hi
            )));
        }
        if hi > self.capacity() {
            return Err(Error::IndexOutOfRange {
                index: hi - 1,
                capacity: self.capacity(),
            });
        }
        if out.capacity() != hi - lo {
            return Err(Error::InvalidInput(format!(
                "slice of {} bits does not fit a vector of capacity {}",
                hi - lo,
                out.capacity()
            )));
        }
        out.bits.copy_from_bitslice(&self.bits[lo..hi]);
        Ok(())
    }

    /// Overwrites `self` with the contents of `other`, reusing the buffer
    /// when the capacities match
    pub fn assign(&mut self, other: &BitVector) {
        if self.capacity() == other.capacity() {
            self.bits.copy_from_bitslice(&other.bits);
        } else {
            self.bits.clone_from(&other.bits);
        }
    }
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.iter_ones().eq(other.iter_ones())
    }
}

impl Eq for BitVector {}

impl Display for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.bits.iter().by_vals() {
            write!(f, "{}", if bit { 1 } else { 0 })?;
        }
        Ok(())
    }
}

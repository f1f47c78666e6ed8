//! This module contains the bit-level output buffer used to assemble the
//! compressed dictionary.
//!
//! Bits are appended most-significant first, which is the order a reader that
//! shifts bytes in from the left expects. Padding to a byte boundary always
//! fills with zero bits.

use bitvec::prelude::*;

//==================================================================================
// 1. The Writer
//==================================================================================

/// An append-only, MSB-first bit buffer backed by a `BitVec<u8, Msb0>`.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bits: BitVec<u8, Msb0>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_bytes(bytes: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(bytes * 8),
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Number of bytes the buffer occupies, counting a partial trailing byte.
    pub fn byte_len(&self) -> usize {
        self.bits.len().div_ceil(8)
    }

    pub fn is_aligned(&self) -> bool {
        self.bits.len() % 8 == 0
    }

    /// Appends the low `width` bits of `value`, most significant bit first.
    pub fn write_bits(&mut self, value: u64, width: usize) {
        debug_assert!(width <= 64, "cannot write {} bits from a u64", width);
        if width == 0 {
            return;
        }
        self.bits
            .extend_from_bitslice(&value.view_bits::<Msb0>()[64 - width..]);
    }

    /// Appends one raw 8-bit value. The buffer does not need to be aligned.
    pub fn write_byte(&mut self, byte: u8) {
        self.write_bits(u64::from(byte), 8);
    }

    /// Appends a pre-built code verbatim.
    pub fn write_code(&mut self, code: &BitSlice<u8, Msb0>) {
        self.bits.extend_from_bitslice(code);
    }

    /// Fills with zero bits up to the next byte boundary.
    pub fn pad_to_byte(&mut self) {
        let rem = self.bits.len() % 8;
        if rem != 0 {
            let padded = self.bits.len() + (8 - rem);
            self.bits.resize(padded, false);
        }
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Pads the final byte and returns the buffer as bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.pad_to_byte();
        self.bits.into_vec()
    }
}

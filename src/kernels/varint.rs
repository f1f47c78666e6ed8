//! This module contains the kernel for the escaped variable-length integer used
//! by the dictionary format for trie edge characters, child offsets and code
//! table entries.
//!
//! Values up to 255 take one byte. Larger values take three: the escape byte
//! `0xFF` followed by the value as a big-endian `u16`. A one-byte 255 and the
//! escape byte share a bit pattern; the format inherits this from the
//! dictionary consumer and it is kept as-is.

use num_traits::{PrimInt, Unsigned};

use crate::bridge::format::{VARINT_ESCAPE, VARINT_MAX_ESCAPED, VARINT_MAX_INLINE};
use crate::error::LexitrieError;
use crate::kernels::bitstream::BitWriter;

//==================================================================================
// 1. Public API for Single-Value Operations
//==================================================================================

/// Number of bytes `value` occupies once encoded.
pub fn encoded_len(value: u64) -> Result<usize, LexitrieError> {
    if value <= VARINT_MAX_INLINE {
        Ok(1)
    } else if value <= VARINT_MAX_ESCAPED {
        Ok(3)
    } else {
        Err(LexitrieError::VarIntOverflow(value))
    }
}

/// Encodes a single unsigned integer, appending it to a bit writer.
pub fn encode_one<T>(value: T, writer: &mut BitWriter) -> Result<(), LexitrieError>
where
    T: PrimInt + Unsigned,
{
    let value = value.to_u64().ok_or_else(|| {
        LexitrieError::InternalError("Failed to widen varint operand to u64".to_string())
    })?;

    match encoded_len(value)? {
        1 => writer.write_byte(value as u8),
        _ => {
            writer.write_byte(VARINT_ESCAPE);
            writer.write_bits(value, 16);
        }
    }
    Ok(())
}

//==================================================================================
// 2. Public API for Slice Operations
//==================================================================================

/// Encodes a whole slice into a fresh byte buffer.
pub fn encode<T>(input_slice: &[T], output_buf: &mut Vec<u8>) -> Result<(), LexitrieError>
where
    T: PrimInt + Unsigned,
{
    let mut writer = BitWriter::with_capacity_bytes(input_slice.len());
    for &val in input_slice {
        encode_one(val, &mut writer)?;
    }
    output_buf.clear();
    output_buf.extend_from_slice(&writer.into_bytes());
    Ok(())
}

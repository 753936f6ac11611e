//! Bit field extraction
//!
//! Extracts setting values from assembled configuration blocks. A setting is
//! addressed by a byte offset and a bit mask; the mask's bit length decides how
//! many bytes are read (big-endian), and the result is shifted right so that
//! the lowest set bit of the mask lands at bit 0.
//!
//! Masks may span several bytes and need not be byte or nibble aligned:
//! `0x180` at offset 7 reads bytes 7 and 8 and selects the last bit of byte 7
//! together with the first bit of byte 8.

use crate::types::{DecoderError, Result};
use byteorder::{BigEndian, ByteOrder};

/// Number of bytes covered by a mask (ceil(bit_length / 8))
pub fn byte_length(mask: u64) -> usize {
    let bits = (u64::BITS - mask.leading_zeros()) as usize;
    (bits + 7) / 8
}

/// Right shift needed to justify a masked value (trailing zero bits of the mask)
pub fn trailing_shift(mask: u64) -> u32 {
    mask.trailing_zeros()
}

/// Read the raw big-endian word covered by `mask` at `byte_offset`, masked but not shifted
pub fn extract_masked(data: &[u8], byte_offset: usize, mask: u64) -> Result<u64> {
    if mask == 0 {
        return Err(DecoderError::InvalidMask(mask));
    }

    let length = byte_length(mask);
    if byte_offset >= data.len() {
        return Err(DecoderError::OffsetOutOfRange {
            offset: byte_offset,
            length,
            data_len: data.len(),
        });
    }
    let end = byte_offset + length;
    // Short reads are rejected rather than truncated
    if end > data.len() {
        return Err(DecoderError::OffsetOutOfRange {
            offset: byte_offset,
            length,
            data_len: data.len(),
        });
    }

    let raw = BigEndian::read_uint(&data[byte_offset..end], length);
    Ok(raw & mask)
}

/// Extract the right-justified value selected by `mask` at `byte_offset`
///
/// # Errors
/// * `InvalidMask` if `mask` is zero (checked first)
/// * `OffsetOutOfRange` if `byte_offset` is past the data, or the bytes the
///   mask covers would run past the end of the data
///
/// # Example
/// ```
/// use asbuilt_decoder::bitfield::extract;
///
/// let data = [0x0A, 0x1B, 0x2C, 0x3D, 0x4E];
/// assert_eq!(extract(&data, 1, 0xFF).unwrap(), 0x1B);
/// assert_eq!(extract(&data, 0, 0xFFFF).unwrap(), 0xA1B);
/// ```
pub fn extract(data: &[u8], byte_offset: usize, mask: u64) -> Result<u64> {
    let masked = extract_masked(data, byte_offset, mask)?;
    Ok(masked >> trailing_shift(mask))
}

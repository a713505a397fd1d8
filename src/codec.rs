//! Variable-length number primitives of the encoded polyline format.
//!
//! Each value is split into 5-bit groups, least significant first. Every
//! group except the last carries the continuation bit (0x20), and each
//! group is written as the character `group + 63`. Signed values are
//! zig-zag mapped before packing so small negative deltas stay short.

use crate::error::PolylineError;

/// Offset added to every 6-bit chunk to land in printable ASCII.
pub const CHAR_OFFSET: u8 = 63;

/// Highest byte a valid chunk can produce (`0x3f + 63`).
const MAX_CHAR: u8 = CHAR_OFFSET + 0x3f;

const CONTINUATION: u8 = 0x20;
const DATA_MASK: u8 = 0x1f;

/// Decodes one unsigned value starting at byte `index`.
///
/// Returns the value and the index just past its last character.
pub fn decode_number_with_index(
    value: &str,
    index: usize,
) -> Result<(u64, usize), PolylineError> {
    let bytes = value.as_bytes();
    let start = index;
    let mut cursor = index;
    let mut number: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = *bytes
            .get(cursor)
            .ok_or(PolylineError::Truncated { index: cursor })?;
        if !(CHAR_OFFSET..=MAX_CHAR).contains(&byte) {
            return Err(PolylineError::InvalidCharacter { index: cursor, byte });
        }
        cursor += 1;

        let chunk = byte - CHAR_OFFSET;
        let bits = u64::from(chunk & DATA_MASK);
        if shift >= u64::BITS || (bits << shift) >> shift != bits {
            return Err(PolylineError::Overflow { index: start });
        }
        number |= bits << shift;
        shift += 5;

        if chunk & CONTINUATION == 0 {
            return Ok((number, cursor));
        }
    }
}

/// Decodes one zig-zag signed value starting at byte `index`.
pub fn decode_signed_number_with_index(
    value: &str,
    index: usize,
) -> Result<(i64, usize), PolylineError> {
    let (number, next) = decode_number_with_index(value, index)?;
    Ok((unzigzag(number), next))
}

/// Decodes the unsigned value at the start of `value`.
pub fn decode_number(value: &str) -> Result<u64, PolylineError> {
    decode_number_with_index(value, 0).map(|(number, _)| number)
}

/// Decodes the signed value at the start of `value`.
pub fn decode_signed_number(value: &str) -> Result<i64, PolylineError> {
    decode_signed_number_with_index(value, 0).map(|(number, _)| number)
}

/// Appends the encoding of an unsigned value to `out`.
pub fn encode_number(mut number: u64, out: &mut String) {
    while number >= u64::from(CONTINUATION) {
        let chunk = (number & u64::from(DATA_MASK)) as u8 | CONTINUATION;
        out.push(char::from(chunk + CHAR_OFFSET));
        number >>= 5;
    }
    out.push(char::from(number as u8 + CHAR_OFFSET));
}

/// Appends the encoding of a signed value to `out`.
pub fn encode_signed_number(number: i64, out: &mut String) {
    encode_number(zigzag(number), out);
}

fn zigzag(number: i64) -> u64 {
    ((number << 1) ^ (number >> 63)) as u64
}

fn unzigzag(number: u64) -> i64 {
    let half = (number >> 1) as i64;
    if number & 1 == 1 { !half } else { half }
}

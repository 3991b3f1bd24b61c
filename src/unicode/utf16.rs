use crate::unicode::*;

const SURROGATE_OFFSET: u32 = 0x10000;
const HIGH_BASE: u32 = 0xD800;
const LOW_BASE: u32 = 0xDC00;

/// Number of code units `code` takes in UTF-16, or `None` past U+10FFFF.
#[inline]
pub const fn len_utf16(code: u32) -> Option<usize> {
    if code < SURROGATE_OFFSET {
        Some(1)
    } else if code <= MAX_CODEPOINT {
        Some(2)
    } else {
        None
    }
}

/// Writes the UTF-16 form of `code` to the front of `dst` and returns how many
/// units were written. Values below U+10000 are copied through unchanged, lone
/// surrogates included.
#[inline]
pub fn encode_utf16(code: u32, dst: &mut [u16; MAX_LEN_UTF16]) -> Result<usize, EncodeError> {
    let len = len_utf16(code).ok_or(EncodeError::OutOfRange(code))?;
    let [high, low] = dst;
    if len == 1 {
        *high = code as u16;
    } else {
        let value = code - SURROGATE_OFFSET;
        *high = (HIGH_BASE | (value >> 10)) as u16;
        *low = (LOW_BASE | (value & 0x3FF)) as u16;
    }
    Ok(len)
}

/// Recombines a high/low surrogate pair into a codepoint.
///
/// The units are not checked. Anything other than a real pair gives a
/// meaningless (but deterministic) number, so check with
/// [`is_high_surrogate`] and [`is_low_surrogate`] first.
#[inline]
pub const fn decode_surrogate_pair(high: u16, low: u16) -> u32 {
    ((high as u32).wrapping_sub(HIGH_BASE) << 10)
        .wrapping_add((low as u32).wrapping_sub(LOW_BASE))
        .wrapping_add(SURROGATE_OFFSET)
}

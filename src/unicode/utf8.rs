use crate::unicode::*;

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;
const MAX_ONE_B: u32 = 0x80;
const MAX_TWO_B: u32 = 0x800;
const MAX_THREE_B: u32 = 0x10000;

/// Number of bytes `code` takes in UTF-8, or `None` past U+10FFFF.
#[inline]
pub const fn len_utf8(code: u32) -> Option<usize> {
    if code < MAX_ONE_B {
        Some(1)
    } else if code < MAX_TWO_B {
        Some(2)
    } else if code < MAX_THREE_B {
        Some(3)
    } else if code <= MAX_CODEPOINT {
        Some(4)
    } else {
        None
    }
}

/// Writes the UTF-8 form of `code` to the front of `dst` and returns how many
/// bytes were written. Bytes past that length are left as they were.
///
/// Surrogate codepoints are encoded like any other value (generalized UTF-8),
/// so the output is only valid UTF-8 for Unicode scalar values.
#[inline]
pub fn encode_utf8(code: u32, dst: &mut [u8; MAX_LEN_UTF8]) -> Result<usize, EncodeError> {
    let len = len_utf8(code).ok_or(EncodeError::OutOfRange(code))?;
    let [a, b, c, d] = dst;
    match len {
        1 => {
            *a = code as u8;
        }
        2 => {
            *a = TAG_TWO_B | (code >> 6) as u8;
            *b = TAG_CONT | (code & 0x3F) as u8;
        }
        3 => {
            *a = TAG_THREE_B | (code >> 12) as u8;
            *b = TAG_CONT | ((code >> 6) & 0x3F) as u8;
            *c = TAG_CONT | (code & 0x3F) as u8;
        }
        _ => {
            *a = TAG_FOUR_B | (code >> 18) as u8;
            *b = TAG_CONT | ((code >> 12) & 0x3F) as u8;
            *c = TAG_CONT | ((code >> 6) & 0x3F) as u8;
            *d = TAG_CONT | (code & 0x3F) as u8;
        }
    }
    Ok(len)
}

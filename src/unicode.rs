pub mod utf16;
pub mod utf8;

pub use utf16::{decode_surrogate_pair, encode_utf16, len_utf16};
pub use utf8::{encode_utf8, len_utf8};

pub const MAX_LEN_UTF8: usize = 4;
pub const MAX_LEN_UTF16: usize = 2;
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("codepoint U+{0:04X} is out of range")]
    OutOfRange(u32),
}

/// Coarse grouping of a codepoint by how it encodes. Reporting only, it never
/// decides whether a value can be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Ascii,
    Bmp,
    Surrogate,
    Supplementary,
    OutOfRange,
}

impl Class {
    pub const fn of(code: u32) -> Self {
        match code {
            0..=0x7F => Class::Ascii,
            0xD800..=0xDFFF => Class::Surrogate,
            0x80..=0xFFFF => Class::Bmp,
            0x10000..=MAX_CODEPOINT => Class::Supplementary,
            _ => Class::OutOfRange,
        }
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Class::Ascii => "ASCII",
            Class::Bmp => "BMP",
            Class::Surrogate => "surrogate",
            Class::Supplementary => "supplementary",
            Class::OutOfRange => "out of range",
        })
    }
}

#[inline]
pub const fn is_surrogate(code: u32) -> bool {
    matches!(code, 0xD800..=0xDFFF)
}

#[inline]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

#[inline]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes() {
        assert_eq!(Class::of(0), Class::Ascii);
        assert_eq!(Class::of(0x7F), Class::Ascii);
        assert_eq!(Class::of(0x80), Class::Bmp);
        assert_eq!(Class::of(0xD7FF), Class::Bmp);
        assert_eq!(Class::of(0xD800), Class::Surrogate);
        assert_eq!(Class::of(0xDFFF), Class::Surrogate);
        assert_eq!(Class::of(0xE000), Class::Bmp);
        assert_eq!(Class::of(0xFFFF), Class::Bmp);
        assert_eq!(Class::of(0x10000), Class::Supplementary);
        assert_eq!(Class::of(MAX_CODEPOINT), Class::Supplementary);
        assert_eq!(Class::of(MAX_CODEPOINT + 1), Class::OutOfRange);
        assert_eq!(Class::of(u32::MAX), Class::OutOfRange);
    }

    #[test]
    fn surrogate_ranges() {
        assert!(!is_high_surrogate(0xD7FF));
        assert!(is_high_surrogate(0xD800));
        assert!(is_high_surrogate(0xDBFF));
        assert!(!is_high_surrogate(0xDC00));
        assert!(is_low_surrogate(0xDC00));
        assert!(is_low_surrogate(0xDFFF));
        assert!(!is_low_surrogate(0xE000));
        assert!(is_surrogate(0xDABC));
        assert!(!is_surrogate(0x1D800));
    }

    #[test]
    fn error_message() {
        assert_eq!(
            EncodeError::OutOfRange(0x110000).to_string(),
            "codepoint U+110000 is out of range"
        );
    }
}

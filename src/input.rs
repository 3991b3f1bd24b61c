//! Parsing of command-line codepoint and code-unit literals.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("invalid codepoint literal")]
    InvalidLiteral(String),
    #[error("UTF-16 code unit out of range")]
    UnitOutOfRange(String),
}

/// Accepts `U+20AC`, `0x20AC`, `8364` or a single character such as `€`.
///
/// Values past U+10FFFF parse fine; rejecting them is the encoder's job.
pub fn parse_codepoint(input: &str) -> Result<u32, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let invalid = || ParseError::InvalidLiteral(input.to_owned());
    if let Some(hex) = strip_hex_prefix(trimmed) {
        return u32::from_str_radix(hex, 16).map_err(|_| invalid());
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed.parse::<u32>().map_err(|_| invalid());
    }
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch as u32),
        _ => Err(invalid()),
    }
}

/// Code units are always hex, with or without a `U+`/`0x` prefix.
pub fn parse_unit(input: &str) -> Result<u16, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let hex = strip_hex_prefix(trimmed).unwrap_or(trimmed);
    let value = u32::from_str_radix(hex, 16)
        .map_err(|_| ParseError::InvalidLiteral(input.to_owned()))?;
    u16::try_from(value).map_err(|_| ParseError::UnitOutOfRange(input.to_owned()))
}

fn strip_hex_prefix(input: &str) -> Option<&str> {
    ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| input.strip_prefix(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codepoint_literals() {
        assert_eq!(parse_codepoint("U+20AC"), Ok(0x20AC));
        assert_eq!(parse_codepoint("u+1f600"), Ok(0x1F600));
        assert_eq!(parse_codepoint("0x41"), Ok(0x41));
        assert_eq!(parse_codepoint("8364"), Ok(0x20AC));
        assert_eq!(parse_codepoint(" 65 "), Ok(0x41));
        assert_eq!(parse_codepoint("€"), Ok(0x20AC));
        assert_eq!(parse_codepoint("x"), Ok(0x78));
        assert_eq!(parse_codepoint("7"), Ok(7));
        assert_eq!(parse_codepoint("U+110000"), Ok(0x110000));
    }

    #[test]
    fn bad_codepoint_literals() {
        assert_eq!(parse_codepoint(""), Err(ParseError::Empty));
        assert_eq!(parse_codepoint("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_codepoint("foo"),
            Err(ParseError::InvalidLiteral("foo".into()))
        );
        assert_eq!(
            parse_codepoint("U+XYZ"),
            Err(ParseError::InvalidLiteral("U+XYZ".into()))
        );
        assert_eq!(
            parse_codepoint("U+"),
            Err(ParseError::InvalidLiteral("U+".into()))
        );
        assert_eq!(
            parse_codepoint("99999999999"),
            Err(ParseError::InvalidLiteral("99999999999".into()))
        );
    }

    #[test]
    fn unit_literals() {
        assert_eq!(parse_unit("D83D"), Ok(0xD83D));
        assert_eq!(parse_unit("0xde00"), Ok(0xDE00));
        assert_eq!(parse_unit("U+0041"), Ok(0x41));
        assert_eq!(parse_unit(""), Err(ParseError::Empty));
        assert_eq!(
            parse_unit("10000"),
            Err(ParseError::UnitOutOfRange("10000".into()))
        );
        assert_eq!(
            parse_unit("zz"),
            Err(ParseError::InvalidLiteral("zz".into()))
        );
    }
}

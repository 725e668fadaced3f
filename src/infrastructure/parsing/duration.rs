//! `H:MM:SS` duration parsing

use super::{ParsingError, ParsingResult};

const COMPONENTS: usize = 3;

/// Parse an `H:MM:SS` running time into seconds
///
/// Exactly three colon-separated unsigned integers are accepted; minutes and
/// seconds are not range checked. Anything else is an error, never zero.
pub fn parse_duration(raw: &str) -> ParsingResult<u64> {
    let input = raw.trim();
    let parts: Vec<&str> = input.split(':').collect();

    if parts.len() != COMPONENTS {
        return Err(ParsingError::invalid_duration(
            input,
            format!("expected {COMPONENTS} components, found {}", parts.len()),
        ));
    }

    let mut values = [0_u64; COMPONENTS];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = parse_component(input, part)?;
    }
    let [hours, minutes, seconds] = values;

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(|| ParsingError::invalid_duration(input, "value out of range"))
}

fn parse_component(input: &str, part: &str) -> ParsingResult<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParsingError::invalid_duration(
            input,
            format!("non-numeric component '{part}'"),
        ));
    }

    part.parse::<u64>()
        .map_err(|e| ParsingError::invalid_duration(input, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::catalog_error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case("01:02:03", 3723)]
    #[case("00:00:00", 0)]
    #[case("1:2:3", 3723)]
    #[case("10:00:00", 36_000)]
    #[case(" 0:59:59 ", 3599)]
    #[case("0:75:00", 4500)]
    fn test_parse_valid_durations(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_duration(input).unwrap(), expected);
    }

    #[rstest]
    #[case("1:2")]
    #[case("a:b:c")]
    #[case("")]
    #[case("1:2:3:4")]
    #[case("1::3")]
    #[case("-1:00:00")]
    #[case("1:00:0x")]
    #[case("1: 00:00")]
    fn test_parse_invalid_durations(#[case] input: &str) {
        let err = parse_duration(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_component_count_in_message() {
        let err = parse_duration("1:2").unwrap_err();
        assert_eq!(err.to_string(), "Invalid duration '1:2': expected 3 components, found 2");
    }

    #[test]
    fn test_overflow_is_an_error() {
        let input = format!("{}:00:00", u64::MAX);
        assert!(parse_duration(&input).is_err());
    }
}

use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsingError {
    #[error("Invalid integer `{value}` for {key}")]
    InvalidInteger { key: String, value: String },
    #[error("Invalid choice `{value}` for {key}, expected one of: {expected}")]
    InvalidChoice {
        key: String,
        value: String,
        expected: String,
    },
    #[error("Value `{value}` for {key} is out of range {min}..={max}")]
    OutOfRange {
        key: String,
        value: String,
        min: u64,
        max: u64,
    },
}

type Result<T> = std::result::Result<T, ParsingError>;

/// Parse a list of items separated by `sep`, like `"alice, bob,,carol"`.
/// Items are trimmed, empty items are dropped and input order is kept.
pub fn parse_list(s: &str, sep: char) -> Vec<String> {
    s.split(sep)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_comma_list(s: &str) -> Vec<String> {
    parse_list(s, ',')
}

/// Parse a whole number of seconds, like `"300"`.
pub fn parse_seconds(key: &str, value: &str) -> Result<Duration> {
    parse_integer(key, value).map(Duration::from_secs)
}

pub fn parse_millis(key: &str, value: &str) -> Result<Duration> {
    parse_integer(key, value).map(Duration::from_millis)
}

pub fn parse_integer(key: &str, value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|_| ParsingError::InvalidInteger {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Parse an integer within `range`, both ends included.
pub fn parse_integer_in(key: &str, value: &str, range: RangeInclusive<u64>) -> Result<u64> {
    let n = parse_integer(key, value)?;
    if !range.contains(&n) {
        return Err(ParsingError::OutOfRange {
            key: key.to_string(),
            value: value.to_string(),
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(n)
}

//! # Password codec
//!
//! Converts between an ordered node-index sequence and its canonical string
//! form (comma-joined decimal indices, `"1,2,3,6,9"`).
//!
//! Decoding accepts two grammars behind an explicit detection rule: a string
//! containing `','` parses as comma-separated decimals; anything else parses
//! as one node index per ASCII digit (`"12369"`). The digit grammar can only
//! express single-digit indices, so it is limited to grids whose index range
//! stays below 10 — on larger grids those tokens simply fall out of range
//! and are dropped.
//!
//! `decode` is the lenient replay-helper entry point: invalid tokens are
//! logged and skipped, duplicates keep their first occurrence, and the valid
//! prefix is still applied. `parse_strict` is the validating form.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordParseError {
    #[error("empty password string")]
    Empty,
    #[error("invalid token `{0}`")]
    InvalidToken(String),
    #[error("node index {index} outside {start}..={end}")]
    OutOfRange { index: u64, start: u64, end: u64 },
    #[error("duplicate node index {0}")]
    Duplicate(u16),
}

/// Canonical encoding: comma-joined decimal indices in selection order.
/// The empty sequence encodes to the empty string.
pub fn encode(sequence: &[u16]) -> String {
    sequence
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn tokens(s: &str) -> Vec<String> {
    if s.contains(',') {
        s.split(',').map(|t| t.trim().to_string()).collect()
    } else {
        s.trim().chars().map(|c| c.to_string()).collect()
    }
}

fn parse_token(
    token: &str,
    start_tag: u16,
    node_count: usize,
    seen: &[u16],
) -> Result<u16, PasswordParseError> {
    let value: u64 = token
        .parse()
        .map_err(|_| PasswordParseError::InvalidToken(token.to_string()))?;
    // Range math in u64: start_tag near u16::MAX must not wrap.
    let start = start_tag as u64;
    let end = start + node_count.saturating_sub(1) as u64;
    let out_of_range = || PasswordParseError::OutOfRange {
        index: value,
        start,
        end,
    };
    if value < start || value > end {
        return Err(out_of_range());
    }
    let index = u16::try_from(value).map_err(|_| out_of_range())?;
    if seen.contains(&index) {
        return Err(PasswordParseError::Duplicate(index));
    }
    Ok(index)
}

/// Lenient decode for gesture replay: drops invalid, out-of-range, and
/// duplicate tokens and returns whatever remains, possibly empty.
pub fn decode(s: &str, start_tag: u16, node_count: usize) -> Vec<u16> {
    let mut out = Vec::new();
    for token in tokens(s) {
        if token.is_empty() {
            continue;
        }
        match parse_token(&token, start_tag, node_count, &out) {
            Ok(index) => out.push(index),
            Err(err) => log::warn!("dropping password token `{token}`: {err}"),
        }
    }
    out
}

/// Strict parse: fails on the first empty, malformed, out-of-range, or
/// duplicate token.
pub fn parse_strict(
    s: &str,
    start_tag: u16,
    node_count: usize,
) -> Result<Vec<u16>, PasswordParseError> {
    let tokens = tokens(s);
    if tokens.iter().all(|t| t.is_empty()) {
        return Err(PasswordParseError::Empty);
    }
    let mut out = Vec::with_capacity(tokens.len());
    for token in &tokens {
        out.push(parse_token(token, start_tag, node_count, &out)?);
    }
    Ok(out)
}

use crate::error::PollError;
use crate::models::ResultSnapshot;
use lazy_static::lazy_static;
use regex::Regex;

const TIMESTAMP_DIGITS: usize = 10;
const MIN_PARTIES: usize = 2;

lazy_static! {
    static ref SIGNED_INTEGER: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
}

/// A decoded payload that passed validation.
#[derive(Debug, Clone)]
pub struct ParsedResults {
    pub snapshot: ResultSnapshot,
    /// Seconds since the epoch, cut down from the feed's raw timestamp.
    pub real_timestamp: i64,
}

pub fn parse(payload: &[u8]) -> Result<ParsedResults, PollError> {
    let snapshot: ResultSnapshot = serde_json::from_slice(payload)?;
    let real_timestamp = real_timestamp(&snapshot.timestamp.as_text())?;

    let parties = snapshot.results.parties.len();
    if parties < MIN_PARTIES {
        return Err(PollError::TooFewParties(parties));
    }

    Ok(ParsedResults {
        snapshot,
        real_timestamp,
    })
}

/// Keeps the leading ten characters of the raw timestamp, read as a signed
/// integer. A sign takes up one of the ten.
pub fn real_timestamp(raw: &str) -> Result<i64, PollError> {
    if raw.len() < TIMESTAMP_DIGITS {
        return Err(PollError::TimestampTooShort(raw.to_string()));
    }
    let prefix = raw
        .get(..TIMESTAMP_DIGITS)
        .filter(|prefix| SIGNED_INTEGER.is_match(prefix))
        .ok_or_else(|| PollError::TimestampNotNumeric(raw.to_string()))?;

    prefix
        .parse::<i64>()
        .map_err(|_| PollError::TimestampNotNumeric(raw.to_string()))
}

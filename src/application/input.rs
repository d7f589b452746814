use crate::domain::booking::TicketId;
use thiserror::Error;

/// Malformed interactive input. Reported to the user; the session loop
/// keeps running rather than aborting the process.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("not a number: '{0}'")]
    NotANumber(String),
    #[error("choice {0} is out of range")]
    OutOfRange(usize),
}

/// Parses a 1-based menu selection into a 0-based index, rejecting
/// anything outside 1..=len.
pub fn parse_choice_index(raw: &str, len: usize) -> Result<usize, InputError> {
    let raw = raw.trim();
    let n: usize = raw
        .parse()
        .map_err(|_| InputError::NotANumber(raw.to_string()))?;
    if n == 0 || n > len {
        return Err(InputError::OutOfRange(n));
    }
    Ok(n - 1)
}

/// Parses a ticket id. Range is not checked: an id outside 1000..=9999
/// can never match a booking and reports as not found downstream.
pub fn parse_ticket_id(raw: &str) -> Result<TicketId, InputError> {
    let raw = raw.trim();
    raw.parse::<u16>()
        .map(TicketId::new)
        .map_err(|_| InputError::NotANumber(raw.to_string()))
}

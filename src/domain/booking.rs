use crate::domain::transaction::TransactionId;
use rand::Rng;
use std::fmt;

/// Numeric ticket identifier handed to the visitor.
///
/// Drawn uniformly from 1000..=9999 with no collision check; two
/// bookings may draw the same id, in which case the later booking wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketId(u16);

impl TicketId {
    pub const MIN: u16 = 1000;
    pub const MAX: u16 = 9999;

    pub fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn generate(rng: &mut impl Rng) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One issued ticket: the destination it was booked for and the
/// transaction that paid for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub destination: String,
    pub transaction: TransactionId,
}

use crate::domain::booking::{Booking, TicketId};
use crate::domain::transaction::{PaymentStatus, TransactionId};
use rand::Rng;
use std::collections::HashMap;

/// Records payment attempts and their status, keyed by transaction id.
#[derive(Debug, Default)]
pub struct TransactionLedger {
    statuses: HashMap<TransactionId, PaymentStatus>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh transaction id. The id is not recorded until
    /// `set_status` writes it, so an unconsulted attempt still reads as
    /// Pending. No uniqueness check.
    pub fn begin(&self, rng: &mut impl Rng) -> TransactionId {
        TransactionId::generate(rng)
    }

    /// Overwrites the status unconditionally; the transaction need not
    /// exist beforehand.
    pub fn set_status(&mut self, transaction: &TransactionId, status: PaymentStatus) {
        self.statuses.insert(transaction.clone(), status);
    }

    /// Status of a transaction, Pending when the id is unknown.
    pub fn status_of(&self, transaction: &TransactionId) -> PaymentStatus {
        self.statuses.get(transaction).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

/// Records issued tickets, keyed by ticket id.
///
/// Entries live in a `Vec` because the correlation scan walks bookings
/// in creation order; a duplicate ticket id overwrites in place, so the
/// later booking wins while keeping the original scan position.
#[derive(Debug, Default)]
pub struct BookingRegistry {
    bookings: Vec<(TicketId, Booking)>,
}

impl BookingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a paid booking. The ticket id is a uniform
    /// random draw with no collision check.
    pub fn create(
        &mut self,
        rng: &mut impl Rng,
        destination: &str,
        transaction: TransactionId,
    ) -> TicketId {
        let id = TicketId::generate(rng);
        let booking = Booking {
            destination: destination.to_string(),
            transaction,
        };
        if let Some(slot) = self.bookings.iter_mut().find(|(t, _)| *t == id) {
            slot.1 = booking;
        } else {
            self.bookings.push((id, booking));
        }
        id
    }

    pub fn get(&self, ticket: TicketId) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|(t, _)| *t == ticket)
            .map(|(_, b)| b)
    }

    pub fn destination_of(&self, ticket: TicketId) -> Option<&str> {
        self.get(ticket).map(|b| b.destination.as_str())
    }

    /// Deletes a booking; returns whether anything was removed.
    pub fn remove(&mut self, ticket: TicketId) -> bool {
        match self.bookings.iter().position(|(t, _)| *t == ticket) {
            Some(index) => {
                self.bookings.remove(index);
                true
            }
            None => false,
        }
    }

    /// Bookings in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (TicketId, &Booking)> {
        self.bookings.iter().map(|(t, b)| (*t, b))
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

/// In-memory state for one interactive session. Discarded on exit;
/// nothing persists across runs.
#[derive(Debug, Default)]
pub struct Session {
    pub ledger: TransactionLedger,
    pub registry: BookingRegistry,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_ledger_set_and_get() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ledger = TransactionLedger::new();
        let tx = ledger.begin(&mut rng);

        assert_eq!(ledger.status_of(&tx), PaymentStatus::Pending);
        ledger.set_status(&tx, PaymentStatus::Confirmed);
        assert_eq!(ledger.status_of(&tx), PaymentStatus::Confirmed);
    }

    #[test]
    fn test_ledger_unknown_id_reads_pending() {
        let mut rng = StdRng::seed_from_u64(2);
        let ledger = TransactionLedger::new();
        let never_recorded = ledger.begin(&mut rng);
        assert_eq!(ledger.status_of(&never_recorded), PaymentStatus::Pending);
    }

    #[test]
    fn test_ledger_overwrite_without_validation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ledger = TransactionLedger::new();
        let tx = TransactionId::generate(&mut rng);

        // Never begun, still writable.
        ledger.set_status(&tx, PaymentStatus::Cancelled);
        assert_eq!(ledger.status_of(&tx), PaymentStatus::Cancelled);
    }

    #[test]
    fn test_registry_create_and_lookup() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut registry = BookingRegistry::new();
        let tx = TransactionId::generate(&mut rng);

        let ticket = registry.create(&mut rng, "Gandhi bavan bengaluru", tx.clone());
        assert_eq!(
            registry.destination_of(ticket),
            Some("Gandhi bavan bengaluru")
        );
        assert_eq!(registry.get(ticket).unwrap().transaction, tx);
    }

    #[test]
    fn test_registry_remove() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut registry = BookingRegistry::new();
        let tx = TransactionId::generate(&mut rng);
        let ticket = registry.create(&mut rng, "NIMHANS brain museum bengaluru", tx);

        assert!(registry.remove(ticket));
        assert_eq!(registry.destination_of(ticket), None);
        assert!(!registry.remove(ticket));
    }

    #[test]
    fn test_registry_collision_last_write_wins() {
        // A constant rng forces every draw onto the same ticket id.
        let mut id_rng = StepRng::new(0, 0);
        let mut tx_rng = StdRng::seed_from_u64(6);
        let mut registry = BookingRegistry::new();

        let tx1 = TransactionId::generate(&mut tx_rng);
        let tx2 = TransactionId::generate(&mut tx_rng);
        let first = registry.create(&mut id_rng, "Gandhi bavan bengaluru", tx1);
        let second = registry.create(&mut id_rng, "Kempegowda museum bengaluru", tx2.clone());

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.destination_of(first),
            Some("Kempegowda museum bengaluru")
        );
        assert_eq!(registry.get(first).unwrap().transaction, tx2);
    }

    #[test]
    fn test_registry_iteration_is_creation_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut registry = BookingRegistry::new();

        let tx1 = TransactionId::generate(&mut rng);
        let t1 = registry.create(&mut rng, "A", tx1);
        let tx2 = TransactionId::generate(&mut rng);
        let t2 = registry.create(&mut rng, "B", tx2);
        let tx3 = TransactionId::generate(&mut rng);
        let t3 = registry.create(&mut rng, "A", tx3);

        let order: Vec<TicketId> = registry.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec![t1, t2, t3]);
    }
}

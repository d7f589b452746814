//! Resolves a ticket to its payment transaction and status.
//!
//! Correlation is by destination, not by the ticket's own paying
//! transaction: the scan walks bookings in creation order and takes the
//! transaction of the first booking sharing the ticket's destination.
//! With two tickets to the same destination, both resolve to the first
//! one's transaction. See DESIGN.md before changing this.

use crate::application::session::Session;
use crate::domain::booking::TicketId;
use crate::domain::transaction::{PaymentStatus, TransactionId};

/// Transaction correlated with a ticket: the one recorded on the first
/// booking (creation order) whose destination matches the ticket's.
pub fn transaction_for(session: &Session, ticket: TicketId) -> Option<&TransactionId> {
    let destination = session.registry.destination_of(ticket)?;
    session
        .registry
        .iter()
        .find(|(_, booking)| booking.destination == destination)
        .map(|(_, booking)| &booking.transaction)
}

/// Payment status of a ticket. `None` means the ticket id is unknown —
/// an informational result, not a failure.
pub fn status_of(session: &Session, ticket: TicketId) -> Option<PaymentStatus> {
    session.registry.get(ticket)?;
    let status = transaction_for(session, ticket)
        .map(|tx| session.ledger.status_of(tx))
        .unwrap_or_default();
    Some(status)
}

/// Cancels a ticket: marks the correlated transaction Cancelled, then
/// removes the booking. Returns the cancelled transaction id, or `None`
/// when the ticket is unknown.
pub fn cancel(session: &mut Session, ticket: TicketId) -> Option<TransactionId> {
    let transaction = transaction_for(session, ticket)?.clone();
    session
        .ledger
        .set_status(&transaction, PaymentStatus::Cancelled);
    session.registry.remove(ticket);
    Some(transaction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const DEST: &str = "Gandhi bavan bengaluru";

    #[test]
    fn test_status_follows_own_transaction_when_unambiguous() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut session = Session::new();

        let tx = session.ledger.begin(&mut rng);
        session.ledger.set_status(&tx, PaymentStatus::Confirmed);
        let ticket = session.registry.create(&mut rng, DEST, tx);

        assert_eq!(status_of(&session, ticket), Some(PaymentStatus::Confirmed));
    }

    #[test]
    fn test_scan_resolves_to_first_booking_for_destination() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = Session::new();

        // First booking to the destination: Confirmed.
        let x1 = session.ledger.begin(&mut rng);
        session.ledger.set_status(&x1, PaymentStatus::Confirmed);
        let t1 = session.registry.create(&mut rng, DEST, x1.clone());

        // Second booking, same destination: Pending.
        let x2 = session.ledger.begin(&mut rng);
        session.ledger.set_status(&x2, PaymentStatus::Pending);
        let t2 = session.registry.create(&mut rng, DEST, x2);

        // Both tickets correlate to the first booking's transaction.
        assert_eq!(transaction_for(&session, t1), Some(&x1));
        assert_eq!(transaction_for(&session, t2), Some(&x1));
        assert_eq!(status_of(&session, t2), Some(PaymentStatus::Confirmed));
    }

    #[test]
    fn test_distinct_destinations_do_not_cross_correlate() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut session = Session::new();

        let x1 = session.ledger.begin(&mut rng);
        session.ledger.set_status(&x1, PaymentStatus::Confirmed);
        session.registry.create(&mut rng, DEST, x1);

        let x2 = session.ledger.begin(&mut rng);
        let other = session
            .registry
            .create(&mut rng, "Kempegowda museum bengaluru", x2.clone());

        assert_eq!(transaction_for(&session, other), Some(&x2));
        assert_eq!(status_of(&session, other), Some(PaymentStatus::Pending));
    }

    #[test]
    fn test_unknown_ticket_is_not_found() {
        let session = Session::new();
        assert_eq!(status_of(&session, TicketId::new(1234)), None);
        let mut session = session;
        assert_eq!(cancel(&mut session, TicketId::new(1234)), None);
    }

    #[test]
    fn test_cancel_removes_booking_and_cancels_transaction() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut session = Session::new();

        let tx = session.ledger.begin(&mut rng);
        session.ledger.set_status(&tx, PaymentStatus::Confirmed);
        let ticket = session.registry.create(&mut rng, DEST, tx.clone());

        let cancelled = cancel(&mut session, ticket);
        assert_eq!(cancelled, Some(tx.clone()));
        assert_eq!(session.ledger.status_of(&tx), PaymentStatus::Cancelled);
        assert_eq!(session.registry.destination_of(ticket), None);
        assert_eq!(status_of(&session, ticket), None);
    }

    #[test]
    fn test_cancel_second_ticket_cancels_first_bookings_transaction() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut session = Session::new();

        let x1 = session.ledger.begin(&mut rng);
        session.ledger.set_status(&x1, PaymentStatus::Confirmed);
        let t1 = session.registry.create(&mut rng, DEST, x1.clone());

        let x2 = session.ledger.begin(&mut rng);
        session.ledger.set_status(&x2, PaymentStatus::Confirmed);
        let t2 = session.registry.create(&mut rng, DEST, x2.clone());

        // The destination scan pins t2 to x1, so that is what gets
        // cancelled; x2 is untouched and t1 now reads Cancelled.
        assert_eq!(cancel(&mut session, t2), Some(x1.clone()));
        assert_eq!(session.ledger.status_of(&x1), PaymentStatus::Cancelled);
        assert_eq!(session.ledger.status_of(&x2), PaymentStatus::Confirmed);
        assert_eq!(session.registry.get(t2), None);
        assert_eq!(status_of(&session, t1), Some(PaymentStatus::Cancelled));
    }

    #[test]
    fn test_status_defaults_pending_when_ledger_never_wrote() {
        let mut rng = StdRng::seed_from_u64(15);
        let mut session = Session::new();

        // Booking exists but its transaction was never recorded.
        let tx = TransactionId::generate(&mut rng);
        let ticket = session.registry.create(&mut rng, DEST, tx);

        assert_eq!(status_of(&session, ticket), Some(PaymentStatus::Pending));
    }
}

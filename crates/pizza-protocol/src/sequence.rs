//! Request sequencing for stale-response rejection
//!
//! Each collection issues a ticket per list request. Only the response
//! carrying the most recently issued ticket may replace the list, so a slow
//! response for an older page can never overwrite a newer one.

/// Proof of issue order for one list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Position of this ticket in issue order, starting at 1
    pub const fn ordinal(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket dispenser for one collection
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    /// A sequence with no tickets issued
    pub const fn new() -> Self {
        Self { issued: 0 }
    }

    /// Issue the next ticket; it supersedes every earlier one
    pub const fn issue(&mut self) -> Ticket {
        self.issued = self.issued.wrapping_add(1);
        Ticket(self.issued)
    }

    /// Whether `ticket` is the latest one issued
    pub const fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut sequence = RequestSequence::new();
        let first = sequence.issue();
        let second = sequence.issue();

        assert!(!sequence.is_latest(first));
        assert!(sequence.is_latest(second));
        assert!(first < second);
        assert_eq!(second.ordinal(), 2);
    }

    #[test]
    fn test_single_ticket_is_latest() {
        let mut sequence = RequestSequence::default();
        let only = sequence.issue();
        assert!(sequence.is_latest(only));
    }

    proptest! {
        #[test]
        fn test_only_last_of_many_is_latest(count in 1usize..200) {
            let mut sequence = RequestSequence::new();
            let tickets: Vec<Ticket> = (0..count).map(|_| sequence.issue()).collect();
            let latest: Vec<bool> = tickets.iter().map(|t| sequence.is_latest(*t)).collect();

            prop_assert_eq!(latest.iter().filter(|fresh| **fresh).count(), 1);
            prop_assert_eq!(latest.last().copied(), Some(true));
        }
    }
}

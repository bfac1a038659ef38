use std::fmt;

use model::base_types::Amount;
use rapid_time::DateTime;

use crate::config::FareParams;
use crate::ticket::Ticket;

/// the amount owed for a completed parking session. Computed once at
/// construction and immutable afterwards; owns the retired ticket.
#[derive(Debug, PartialEq)]
pub struct Fare {
    ticket: Ticket,
    exit_time: DateTime,
    amount: Amount,
}

// static functions
impl Fare {
    /// amount = (elapsed seconds + grace seconds) * rate. The caller must
    /// ensure that exit_time is not earlier than the ticket's entry time.
    /// Both durations are finite, so in_sec cannot fail.
    pub(crate) fn new(ticket: Ticket, exit_time: DateTime, params: &FareParams) -> Fare {
        let elapsed_seconds = (exit_time - ticket.entry_time()).in_sec().unwrap();
        let grace_seconds = params.grace.in_sec().unwrap();
        let amount = (elapsed_seconds + grace_seconds) as Amount * params.rate_per_second;
        Fare {
            ticket,
            exit_time,
            amount,
        }
    }
}

// methods
impl Fare {
    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn exit_time(&self) -> DateTime {
        self.exit_time
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "fare {:.2} for {} (exited {})",
            self.amount, self.ticket, self.exit_time
        )
    }
}

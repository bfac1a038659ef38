use std::fmt;

use model::base_types::{LotIdx, TicketIdx};
use model::spot::Spot;
use model::vehicle::Vehicle;
use rapid_time::DateTime;

/// proof of an active parking session, binding a vehicle to a spot and an
/// entry time. Minted only by Lot::park and consumed by Lot::exit.
/// Deliberately not Clone: redeeming a session moves the ticket into the
/// fare, so a second redemption cannot be expressed.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket {
    idx: TicketIdx,
    lot: LotIdx,
    spot: Spot,
    vehicle: Vehicle,
    entry_time: DateTime,
}

// static functions
impl Ticket {
    pub(crate) fn new(
        idx: TicketIdx,
        lot: LotIdx,
        spot: Spot,
        vehicle: Vehicle,
        entry_time: DateTime,
    ) -> Ticket {
        Ticket {
            idx,
            lot,
            spot,
            vehicle,
            entry_time,
        }
    }
}

// methods
impl Ticket {
    pub fn idx(&self) -> TicketIdx {
        self.idx
    }

    pub fn lot(&self) -> LotIdx {
        self.lot
    }

    pub fn spot(&self) -> &Spot {
        &self.spot
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn entry_time(&self) -> DateTime {
        self.entry_time
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ticket {}: {} at {} since {}",
            self.idx, self.vehicle, self.spot, self.entry_time
        )
    }
}

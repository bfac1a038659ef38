#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time as stdtime;

use model::base_types::{Distance, LotIdx, SpotCount, SpotIdx, TicketIdx};
use model::spot::{Spot, SpotType};
use model::spots::{Spots, SpotsError};
use model::vehicle::Vehicle;
use rapid_time::{DateTime, Duration};
use thiserror::Error;
use tracing::info;

use crate::config::FareParams;
use crate::fare::Fare;
use crate::ticket::Ticket;

static LOT_COUNTER: AtomicU32 = AtomicU32::new(0);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LotError {
    #[error("no available {0} spot, the lot is full")]
    Full(SpotType),
    #[error("{ticket} was not issued by this lot or is no longer outstanding")]
    ForeignTicket { ticket: Ticket },
    #[error("exit at {exit_time} is earlier than the entry time of {ticket}")]
    ExitBeforeEntry { ticket: Ticket, exit_time: DateTime },
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error(transparent)]
    Spots(#[from] SpotsError),
}

/// the facility aggregate. Owns one available and one occupied pool; every
/// spot is a member of exactly one of the two at any time, and moving a spot
/// between them is what models occupancy.
pub struct Lot {
    idx: LotIdx,
    available: Spots,
    occupied: Spots,
    // spot idx of each ticket that has been issued but not redeemed yet
    outstanding_tickets: HashMap<TicketIdx, SpotIdx>,
    fare_params: FareParams,
    spot_counter: u32,
    ticket_counter: u32,
}

// static functions
impl Lot {
    pub fn new(fare_params: FareParams) -> Lot {
        Lot {
            idx: LotIdx::from(LOT_COUNTER.fetch_add(1, Ordering::Relaxed)),
            available: Spots::new(),
            occupied: Spots::new(),
            outstanding_tickets: HashMap::new(),
            fare_params,
            spot_counter: 0,
            ticket_counter: 0,
        }
    }

    /// the current system time, read at every call site that needs a
    /// default timestamp.
    fn now() -> DateTime {
        DateTime::new("1970-01-01T00:00:00")
            + Duration::from_seconds(
                stdtime::SystemTime::now()
                    .duration_since(stdtime::UNIX_EPOCH)
                    .unwrap()
                    .as_secs(),
            )
    }
}

impl Default for Lot {
    fn default() -> Lot {
        Lot::new(FareParams::default())
    }
}

// facility setup
impl Lot {
    /// populates the available pool with the given layout: for each floor
    /// and each per-type position p, one spot with distance
    /// floor * count_for_type + p + 1 and a description encoding
    /// floor, position and type plus the spot idx as tiebreaker suffix.
    /// The idx suffix keeps descriptions unique across repeated calls.
    pub fn add_spots(
        &mut self,
        floors: SpotCount,
        carpool_per_floor: SpotCount,
        handicap_per_floor: SpotCount,
        regular_per_floor: SpotCount,
    ) {
        for floor in 0..floors {
            for (spot_type, count) in [
                (SpotType::Carpool, carpool_per_floor),
                (SpotType::Handicap, handicap_per_floor),
                (SpotType::Regular, regular_per_floor),
            ] {
                for position in 0..count {
                    let spot = self.create_spot(floor, position, count, spot_type);
                    self.available.add(spot);
                }
            }
        }
        info!(
            lot = %self.idx,
            floors,
            carpool_per_floor,
            handicap_per_floor,
            regular_per_floor,
            "added spots"
        );
    }

    fn create_spot(
        &mut self,
        floor: SpotCount,
        position: SpotCount,
        count_for_type: SpotCount,
        spot_type: SpotType,
    ) -> Spot {
        let idx = SpotIdx::from(self.spot_counter);
        self.spot_counter += 1;
        let distance = Distance::from(floor * count_for_type + position + 1);
        let description = format!("{}.{}.{}.{}", floor, position, spot_type, idx);
        Spot::new(idx, distance, spot_type, description)
    }
}

// parking methods
impl Lot {
    pub fn can_park(&self, spot_type: SpotType) -> bool {
        self.available.nearest_by_type(spot_type).is_some()
    }

    /// parks the vehicle on the nearest available spot of the given type,
    /// with the entry time read from the system clock.
    pub fn park(&mut self, spot_type: SpotType, vehicle: Vehicle) -> Result<Ticket, LotError> {
        self.park_at(spot_type, vehicle, Lot::now())
    }

    /// parks the vehicle with an explicit entry time. The spot moves from
    /// the available to the occupied pool and a ticket is minted.
    pub fn park_at(
        &mut self,
        spot_type: SpotType,
        vehicle: Vehicle,
        entry_time: DateTime,
    ) -> Result<Ticket, LotError> {
        let nearest = self
            .available
            .nearest_by_type(spot_type)
            .cloned()
            .ok_or(LotError::Full(spot_type))?;
        let spot = self.available.remove(&nearest)?;
        self.occupied.add(spot.clone());

        let idx = TicketIdx::from(self.ticket_counter);
        self.ticket_counter += 1;
        self.outstanding_tickets.insert(idx, spot.idx());

        info!(
            lot = %self.idx,
            ticket = %idx,
            spot = spot.description(),
            vehicle = vehicle.registration(),
            "vehicle parked"
        );
        Ok(Ticket::new(idx, self.idx, spot, vehicle, entry_time))
    }

    /// redeems the ticket with the exit time read from the system clock.
    pub fn exit(&mut self, ticket: Ticket) -> Result<Fare, LotError> {
        let exit_time = Lot::now();
        self.exit_at(ticket, exit_time)
    }

    /// redeems the ticket: the spot moves back from the occupied to the
    /// available pool and the ticket is retired into the returned fare.
    /// Tickets of other lots are rejected without touching the pools; a
    /// rejected ticket is handed back inside the error.
    pub fn exit_at(&mut self, ticket: Ticket, exit_time: DateTime) -> Result<Fare, LotError> {
        if ticket.lot() != self.idx
            || self.outstanding_tickets.get(&ticket.idx()) != Some(&ticket.spot().idx())
        {
            return Err(LotError::ForeignTicket { ticket });
        }
        if exit_time < ticket.entry_time() {
            return Err(LotError::ExitBeforeEntry { ticket, exit_time });
        }

        let spot = self.occupied.remove(ticket.spot())?;
        self.available.add(spot);
        self.outstanding_tickets.remove(&ticket.idx());

        let fare = Fare::new(ticket, exit_time, &self.fare_params);
        info!(
            lot = %self.idx,
            ticket = %fare.ticket().idx(),
            amount = fare.amount(),
            "vehicle exited"
        );
        Ok(fare)
    }
}

// status methods
impl Lot {
    pub fn idx(&self) -> LotIdx {
        self.idx
    }

    pub fn available(&self) -> &Spots {
        &self.available
    }

    pub fn occupied(&self) -> &Spots {
        &self.occupied
    }

    /// human-readable summary of the available spots per type.
    pub fn status(&self) -> String {
        format!("available: {}", self.available)
    }
}

impl fmt::Display for Lot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "lot {}: available: {}; occupied: {}",
            self.idx, self.available, self.occupied
        )
    }
}

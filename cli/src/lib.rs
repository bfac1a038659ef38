
use std::collections::HashMap;

use lot::{Lot, LotError, Ticket};
use model::base_types::TicketIdx;
use model::spot::SpotType;
use model::vehicle::Vehicle;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{command} expects {expected}")]
    BadArguments {
        command: &'static str,
        expected: &'static str,
    },
    #[error("no outstanding ticket {0}")]
    UnknownTicket(TicketIdx),
    #[error(transparent)]
    Lot(#[from] LotError),
}

/// maps whitespace-delimited command lines onto the lot's public API. The
/// command set is a closed allow-list; nothing is resolved by name at
/// runtime. The dispatcher plays the external caller: it keeps the tickets
/// it was handed out, keyed by their idx.
pub struct Dispatcher {
    lot: Lot,
    tickets: HashMap<TicketIdx, Ticket>,
}

// static functions
impl Dispatcher {
    pub fn new(lot: Lot) -> Dispatcher {
        Dispatcher {
            lot,
            tickets: HashMap::new(),
        }
    }
}

// methods
impl Dispatcher {
    /// executes one command line and returns the reply to print. Empty
    /// lines are ignored.
    pub fn execute(&mut self, line: &str) -> Result<String, DispatchError> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(String::new());
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "status" => Ok(self.lot.status()),
            "can_park" => self.can_park(&args),
            "park" => self.park(&args),
            "exit" => self.exit(&args),
            "add_spots" => self.add_spots(&args),
            _ => Err(DispatchError::UnknownCommand(command.to_string())),
        }
    }

    fn can_park(&self, args: &[&str]) -> Result<String, DispatchError> {
        let &[spot_type] = args else {
            return Err(DispatchError::BadArguments {
                command: "can_park",
                expected: "<spot-type>",
            });
        };
        let spot_type = parse_spot_type(spot_type, "can_park")?;
        Ok(format!("{}", self.lot.can_park(spot_type)))
    }

    fn park(&mut self, args: &[&str]) -> Result<String, DispatchError> {
        let &[spot_type, registration, color] = args else {
            return Err(DispatchError::BadArguments {
                command: "park",
                expected: "<spot-type> <registration> <color>",
            });
        };
        let spot_type = parse_spot_type(spot_type, "park")?;
        let vehicle = Vehicle::new(registration.to_string(), color.to_string());

        let ticket = self.lot.park(spot_type, vehicle)?;
        let reply = ticket.to_string();
        self.tickets.insert(ticket.idx(), ticket);
        Ok(reply)
    }

    fn exit(&mut self, args: &[&str]) -> Result<String, DispatchError> {
        let &[idx] = args else {
            return Err(DispatchError::BadArguments {
                command: "exit",
                expected: "<ticket-idx>",
            });
        };
        let idx: TicketIdx = idx
            .parse::<u32>()
            .map_err(|_| DispatchError::BadArguments {
                command: "exit",
                expected: "<ticket-idx>",
            })?
            .into();

        let ticket = self
            .tickets
            .remove(&idx)
            .ok_or(DispatchError::UnknownTicket(idx))?;
        let fare = self.lot.exit(ticket)?;
        Ok(fare.to_string())
    }

    fn add_spots(&mut self, args: &[&str]) -> Result<String, DispatchError> {
        let &[floors, carpool, handicap, regular] = args else {
            return Err(DispatchError::BadArguments {
                command: "add_spots",
                expected: "<floors> <carpool> <handicap> <regular>",
            });
        };
        let floors = parse_count(floors, "add_spots")?;
        let carpool = parse_count(carpool, "add_spots")?;
        let handicap = parse_count(handicap, "add_spots")?;
        let regular = parse_count(regular, "add_spots")?;

        self.lot.add_spots(floors, carpool, handicap, regular);
        Ok(self.lot.status())
    }
}

fn parse_spot_type(string: &str, command: &'static str) -> Result<SpotType, DispatchError> {
    string.parse().map_err(|_| DispatchError::BadArguments {
        command,
        expected: "<spot-type> of carpool, handicap or regular",
    })
}

fn parse_count(string: &str, command: &'static str) -> Result<u32, DispatchError> {
    string.parse().map_err(|_| DispatchError::BadArguments {
        command,
        expected: "numeric spot counts",
    })
}

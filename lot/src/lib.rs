pub mod config;
pub mod fare;
pub mod json_serialisation;
pub mod lot;
pub mod ticket;

pub use config::FareParams;
pub use fare::Fare;
pub use lot::{Lot, LotError};
pub use ticket::Ticket;

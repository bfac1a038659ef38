use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::base_types::{Distance, SpotIdx};

/// the closed set of spot categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpotType {
    Carpool,
    Handicap,
    Regular,
}

impl SpotType {
    pub const ALL: [SpotType; 3] = [SpotType::Carpool, SpotType::Handicap, SpotType::Regular];
}

impl fmt::Display for SpotType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpotType::Carpool => write!(f, "carpool"),
            SpotType::Handicap => write!(f, "handicap"),
            SpotType::Regular => write!(f, "regular"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown spot type: {0}")]
pub struct ParseSpotTypeError(String);

impl FromStr for SpotType {
    type Err = ParseSpotTypeError;

    fn from_str(string: &str) -> Result<SpotType, Self::Err> {
        match string {
            "carpool" => Ok(SpotType::Carpool),
            "handicap" => Ok(SpotType::Handicap),
            "regular" => Ok(SpotType::Regular),
            _ => Err(ParseSpotTypeError(string.to_string())),
        }
    }
}

/// a single parking location with a fixed type and distance from the
/// entrance. Immutable once created; the (distance, idx) pair is the stable
/// key used for collection membership, the description is unique across the
/// facility and supports targeted lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spot {
    idx: SpotIdx,
    distance: Distance,
    spot_type: SpotType,
    description: String,
}

// static functions
impl Spot {
    pub fn new(idx: SpotIdx, distance: Distance, spot_type: SpotType, description: String) -> Spot {
        Spot {
            idx,
            distance,
            spot_type,
            description,
        }
    }
}

// methods
impl Spot {
    pub fn idx(&self) -> SpotIdx {
        self.idx
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn spot_type(&self) -> SpotType {
        self.spot_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn key(&self) -> (Distance, SpotIdx) {
        (self.distance, self.idx)
    }
}

impl fmt::Display for Spot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "spot {} ({}, distance {})",
            self.description, self.spot_type, self.distance
        )
    }
}


use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use itertools::Itertools;
use thiserror::Error;

use crate::base_types::{Distance, SpotCount, SpotIdx};
use crate::spot::{Spot, SpotType};

type SpotKey = (Distance, SpotIdx);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpotsError {
    #[error("spot {0} is not a member of this collection")]
    SpotNotFound(String),
}

/// an ordered pool of spots, ascending by (distance, idx). Equal distances
/// resolve to the spot with the smaller idx, i.e. the one created earlier.
///
/// A secondary ordered index per spot type backs nearest_by_type, so moving
/// a spot between pools never re-sorts anything.
#[derive(Debug, Clone, Default)]
pub struct Spots {
    spots: BTreeMap<SpotKey, Spot>,
    by_type: HashMap<SpotType, BTreeSet<SpotKey>>,
}

// static functions
impl Spots {
    pub fn new() -> Spots {
        Spots::default()
    }
}

// write/update methods
impl Spots {
    /// inserts the spot. No duplicate detection; adding a spot with a key
    /// that is already present replaces the member.
    pub fn add(&mut self, spot: Spot) {
        self.by_type
            .entry(spot.spot_type())
            .or_default()
            .insert(spot.key());
        self.spots.insert(spot.key(), spot);
    }

    /// removes the member with the same stable key. Removing a non-member
    /// is an error, not a silent success.
    pub fn remove(&mut self, spot: &Spot) -> Result<Spot, SpotsError> {
        self.remove_key(spot.key())
            .ok_or_else(|| SpotsError::SpotNotFound(spot.description().to_string()))
    }

    /// removes the spot with the given description if present, None otherwise.
    pub fn remove_by_description(&mut self, description: &str) -> Option<Spot> {
        let key = self.find_by_description(description)?.key();
        self.remove_key(key)
    }

    fn remove_key(&mut self, key: SpotKey) -> Option<Spot> {
        let spot = self.spots.remove(&key)?;
        if let Some(keys) = self.by_type.get_mut(&spot.spot_type()) {
            keys.remove(&key);
        }
        Some(spot)
    }
}

// query methods
impl Spots {
    pub fn find_by_description(&self, description: &str) -> Option<&Spot> {
        self.spots
            .values()
            .find(|spot| spot.description() == description)
    }

    pub fn count_by_type(&self, spot_type: SpotType) -> SpotCount {
        self.by_type
            .get(&spot_type)
            .map(|keys| keys.len() as SpotCount)
            .unwrap_or(0)
    }

    /// the nearest spot of the given type, None if the pool has no such spot.
    pub fn nearest_by_type(&self, spot_type: SpotType) -> Option<&Spot> {
        let key = self.by_type.get(&spot_type)?.first()?;
        self.spots.get(key)
    }

    /// the nearest spot regardless of type, None if the pool is empty.
    pub fn nearest(&self) -> Option<&Spot> {
        self.spots.values().next()
    }

    pub fn contains(&self, spot: &Spot) -> bool {
        self.spots.contains_key(&spot.key())
    }

    /// all members in ascending (distance, idx) order.
    pub fn iter(&self) -> impl Iterator<Item = &Spot> + '_ {
        self.spots.values()
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

impl fmt::Display for Spots {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            SpotType::ALL
                .iter()
                .map(|&spot_type| format!("{} {} spots", self.count_by_type(spot_type), spot_type))
                .join(", ")
        )
    }
}

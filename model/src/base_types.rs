use derive_more::Display;
use derive_more::From;

pub type Idx = u32;

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpotIdx(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TicketIdx(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LotIdx(pub Idx);

/// number of steps from the facility entrance. Spots are ordered by this
/// metric; smaller is closer.
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(pub u32);

impl Distance {
    pub const ZERO: Distance = Distance(0);

    pub fn in_steps(&self) -> u32 {
        self.0
    }
}

pub type SpotCount = u32;
pub type Amount = f64;

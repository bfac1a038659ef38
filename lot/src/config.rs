use model::base_types::Amount;
use rapid_time::Duration;

/// fare parameters. The defaults are the original pricing model: a flat 300
/// second offset that is always added and 0.1 currency units per second.
#[derive(Debug, Clone, PartialEq)]
pub struct FareParams {
    pub grace: Duration,
    pub rate_per_second: Amount,
}

impl Default for FareParams {
    fn default() -> FareParams {
        FareParams {
            grace: Duration::from_seconds(300),
            rate_per_second: 0.1,
        }
    }
}


use serde::Deserialize;

use model::base_types::Amount;
use rapid_time::Duration;

use crate::config::FareParams;
use crate::lot::{Lot, LotError};

type Integer = u32;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SpotsPerFloor {
    carpool: Integer,
    handicap: Integer,
    regular: Integer,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    grace_period_in_seconds: u64,
    rate_per_second: Amount,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    floors: Integer,
    spots_per_floor: SpotsPerFloor,
    parameters: Option<Parameters>,
}

/// builds a lot from a json layout: the number of floors, the per-type spot
/// counts per floor and optional fare parameters (defaults apply when the
/// parameters are missing).
pub fn load_lot_from_json(input: serde_json::Value) -> Result<Lot, LotError> {
    let json_input: JsonInput =
        serde_json::from_value(input).map_err(|err| LotError::InvalidLayout(err.to_string()))?;

    let fare_params = match json_input.parameters {
        Some(parameters) => FareParams {
            grace: Duration::from_seconds(parameters.grace_period_in_seconds),
            rate_per_second: parameters.rate_per_second,
        },
        None => FareParams::default(),
    };

    let mut lot = Lot::new(fare_params);
    lot.add_spots(
        json_input.floors,
        json_input.spots_per_floor.carpool,
        json_input.spots_per_floor.handicap,
        json_input.spots_per_floor.regular,
    );
    Ok(lot)
}

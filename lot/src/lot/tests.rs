use super::*;
use model::base_types::Distance;
use model::spot::SpotType;
use model::vehicle::Vehicle;
use rapid_time::{DateTime, Duration};

fn red_vehicle() -> Vehicle {
    Vehicle::new("ZH-007".to_string(), "red".to_string())
}

fn noon() -> DateTime {
    DateTime::new("2023-07-24T12:00:00")
}

fn available_descriptions(lot: &Lot) -> Vec<String> {
    lot.available()
        .iter()
        .map(|spot| spot.description().to_string())
        .collect()
}

#[test]
fn empty_lot_rejects_parking() {
    let mut lot = Lot::default();
    lot.add_spots(0, 0, 0, 0);

    assert!(!lot.can_park(SpotType::Regular));
    assert!(matches!(
        lot.park_at(SpotType::Regular, red_vehicle(), noon()),
        Err(LotError::Full(SpotType::Regular))
    ));
}

#[test]
fn single_regular_spot_is_handed_out_and_exhausts_the_pool() {
    let mut lot = Lot::default();
    lot.add_spots(1, 0, 0, 1);

    assert!(lot.can_park(SpotType::Regular));
    assert!(!lot.can_park(SpotType::Carpool));
    assert!(!lot.can_park(SpotType::Handicap));

    let ticket = lot.park_at(SpotType::Regular, red_vehicle(), noon()).unwrap();
    assert_eq!(ticket.spot().distance(), Distance::from(1));
    assert_eq!(ticket.spot().spot_type(), SpotType::Regular);
    assert!(
        ticket.spot().description().starts_with("0.0.regular."),
        "unexpected description: {}",
        ticket.spot().description()
    );

    assert!(!lot.can_park(SpotType::Regular));
    assert_eq!(lot.available().len(), 0);
    assert_eq!(lot.occupied().len(), 1);
}

#[test]
fn can_park_iff_a_nearest_spot_of_that_type_exists() {
    let mut lot = Lot::default();
    lot.add_spots(1, 1, 0, 2);

    for spot_type in SpotType::ALL {
        assert_eq!(
            lot.can_park(spot_type),
            lot.available().nearest_by_type(spot_type).is_some(),
            "can_park and nearest_by_type disagree for {}",
            spot_type
        );
    }
}

#[test]
fn park_moves_the_spot_into_exactly_one_pool() {
    let mut lot = Lot::default();
    lot.add_spots(2, 1, 1, 1);
    let total = lot.available().len();

    let ticket = lot.park_at(SpotType::Handicap, red_vehicle(), noon()).unwrap();
    let description = ticket.spot().description().to_string();

    assert!(lot.available().find_by_description(&description).is_none());
    assert!(lot.occupied().find_by_description(&description).is_some());
    assert_eq!(lot.available().len() + lot.occupied().len(), total);

    let fare = lot.exit_at(ticket, noon() + Duration::from_seconds(60)).unwrap();
    let description = fare.ticket().spot().description();

    assert!(lot.available().find_by_description(description).is_some());
    assert!(lot.occupied().find_by_description(description).is_none());
    assert_eq!(lot.available().len() + lot.occupied().len(), total);
}

#[test]
fn park_then_exit_restores_the_available_pool() {
    let mut lot = Lot::default();
    lot.add_spots(3, 2, 1, 4);
    let mut before = available_descriptions(&lot);
    before.sort();

    let ticket = lot.park_at(SpotType::Regular, red_vehicle(), noon()).unwrap();
    let spot_before = ticket.spot().clone();
    let fare = lot.exit_at(ticket, noon() + Duration::from_seconds(1)).unwrap();

    let restored = lot
        .available()
        .find_by_description(spot_before.description())
        .unwrap();
    assert_eq!(*restored, spot_before);
    assert_eq!(fare.ticket().spot(), &spot_before);

    let mut after = available_descriptions(&lot);
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn fare_for_ten_seconds_is_thirty_one() {
    let mut lot = Lot::default();
    lot.add_spots(1, 0, 0, 1);

    let ticket = lot.park_at(SpotType::Regular, red_vehicle(), noon()).unwrap();
    let fare = lot.exit_at(ticket, noon() + Duration::from_seconds(10)).unwrap();

    assert!(
        (fare.amount() - 31.0).abs() < 1e-9,
        "fare for 10 seconds should be (10 + 300) * 0.1 = 31.0 but is {}",
        fare.amount()
    );
}

#[test]
fn fare_is_monotone_in_the_exit_time() {
    let mut lot = Lot::default();
    lot.add_spots(1, 0, 0, 1);

    let mut last = f64::MIN;
    for seconds in [0, 1, 10, 60, 3600, 86400] {
        let ticket = lot.park_at(SpotType::Regular, red_vehicle(), noon()).unwrap();
        let fare = lot
            .exit_at(ticket, noon() + Duration::from_seconds(seconds))
            .unwrap();
        assert!(
            fare.amount() >= last,
            "fare decreased from {} to {} at +{}s",
            last,
            fare.amount(),
            seconds
        );
        last = fare.amount();
    }
}

#[test]
fn foreign_ticket_is_rejected_without_touching_the_pools() {
    let mut home = Lot::default();
    home.add_spots(1, 0, 0, 1);
    let mut other = Lot::default();
    other.add_spots(1, 0, 0, 1);

    let ticket = home.park_at(SpotType::Regular, red_vehicle(), noon()).unwrap();

    let err = other
        .exit_at(ticket, noon() + Duration::from_seconds(5))
        .unwrap_err();
    let ticket = match err {
        LotError::ForeignTicket { ticket } => ticket,
        other => panic!("expected ForeignTicket but got {:?}", other),
    };

    // the other lot is unchanged, the session is still open at home
    assert_eq!(other.available().len(), 1);
    assert_eq!(other.occupied().len(), 0);
    assert_eq!(home.occupied().len(), 1);

    // the ticket handed back in the error is still redeemable at home
    let fare = home
        .exit_at(ticket, noon() + Duration::from_seconds(10))
        .unwrap();
    assert!((fare.amount() - 31.0).abs() < 1e-9);
}

#[test]
fn exit_before_entry_is_rejected_and_the_ticket_survives() {
    let mut lot = Lot::default();
    lot.add_spots(1, 0, 0, 1);

    let entry = noon() + Duration::from_seconds(100);
    let ticket = lot.park_at(SpotType::Regular, red_vehicle(), entry).unwrap();

    let err = lot.exit_at(ticket, noon()).unwrap_err();
    let ticket = match err {
        LotError::ExitBeforeEntry { ticket, .. } => ticket,
        other => panic!("expected ExitBeforeEntry but got {:?}", other),
    };
    assert_eq!(lot.occupied().len(), 1);

    lot.exit_at(ticket, entry + Duration::from_seconds(1)).unwrap();
    assert_eq!(lot.occupied().len(), 0);
}

#[test]
fn nearer_floors_are_preferred() {
    let mut lot = Lot::default();
    lot.add_spots(2, 1, 0, 0);

    let nearest = lot.available().nearest().unwrap();
    assert_eq!(nearest.distance(), Distance::from(1));
    assert!(
        nearest.description().starts_with("0.0.carpool."),
        "unexpected description: {}",
        nearest.description()
    );

    let ticket = lot.park_at(SpotType::Carpool, red_vehicle(), noon()).unwrap();
    assert_eq!(ticket.spot().distance(), Distance::from(1));

    let next = lot.available().nearest_by_type(SpotType::Carpool).unwrap();
    assert_eq!(next.distance(), Distance::from(2));
    assert!(
        next.description().starts_with("1.0.carpool."),
        "unexpected description: {}",
        next.description()
    );
}

#[test]
fn descriptions_are_unique_across_the_facility() {
    let mut lot = Lot::default();
    lot.add_spots(3, 10, 5, 20);

    let mut descriptions = available_descriptions(&lot);
    descriptions.sort();
    let before = descriptions.len();
    descriptions.dedup();
    assert_eq!(before, descriptions.len(), "duplicate spot descriptions");
}

#[test]
fn descriptions_stay_unique_across_repeated_add_spots() {
    let mut lot = Lot::default();
    // every call produces the same floor/position/type prefixes, so only
    // the suffix can keep the descriptions apart
    for _ in 0..120 {
        lot.add_spots(1, 1, 0, 0);
    }

    let mut descriptions = available_descriptions(&lot);
    descriptions.sort();
    let before = descriptions.len();
    descriptions.dedup();
    assert_eq!(before, descriptions.len(), "duplicate spot descriptions");
    assert_eq!(before, 120);
}

#[test]
fn status_reports_available_counts_per_type() {
    let mut lot = Lot::default();
    lot.add_spots(2, 1, 2, 3);

    assert_eq!(
        lot.status(),
        "available: 2 carpool spots, 4 handicap spots, 6 regular spots"
    );
}

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::config::constant::{HOURS_IN_DAY, MAX_DEMAND_BOXES, MIN_DEMAND_BOXES};
use crate::domain::types::{HandlingNote, Packaging, ProductType, TemperatureRequirement};

/// Service attributes shared by depot and customer rows. Depots get the full
/// set too, mirroring how every row of the output table is fully populated.
pub struct ServiceFields {
    pub demand: u32,
    pub product_type: ProductType,
    pub temperature_requirement: TemperatureRequirement,
    pub ripeness_or_expiration: NaiveDate,
    pub packaging: Packaging,
    pub handling_notes: HandlingNote,
    pub time_window_start: u8,
    pub time_window_end: u8,
}

/// Draws one full set of service fields from the given random source.
pub fn sample_service_fields(rng: &mut impl Rng, reference: NaiveDate) -> ServiceFields {
    let product_type = sample_product_type(rng);
    let demand = sample_demand(rng);
    let ripeness_or_expiration = sample_expiration_date(rng, reference);
    let packaging = sample_packaging(rng);
    let handling_notes = sample_handling_note(rng);
    let (time_window_start, time_window_end) = sample_hour_window(rng);

    ServiceFields {
        demand,
        product_type,
        temperature_requirement: product_type.temperature_requirement(),
        ripeness_or_expiration,
        packaging,
        handling_notes,
        time_window_start,
        time_window_end,
    }
}

pub fn sample_demand(rng: &mut impl Rng) -> u32 {
    rng.gen_range(MIN_DEMAND_BOXES..=MAX_DEMAND_BOXES)
}

pub fn sample_product_type(rng: &mut impl Rng) -> ProductType {
    ProductType::ALL[rng.gen_range(0..ProductType::ALL.len())]
}

pub fn sample_packaging(rng: &mut impl Rng) -> Packaging {
    Packaging::ALL[rng.gen_range(0..Packaging::ALL.len())]
}

pub fn sample_handling_note(rng: &mut impl Rng) -> HandlingNote {
    HandlingNote::ALL[rng.gen_range(0..HandlingNote::ALL.len())]
}

/// Expiration date: ripeness offset of 0..=3 days past the reference, plus a
/// shelf life of 2..=7 days past ripeness.
pub fn sample_expiration_date(rng: &mut impl Rng, reference: NaiveDate) -> NaiveDate {
    let ripeness_days: i64 = rng.gen_range(0..=3);
    let shelf_days: i64 = rng.gen_range(2..=7);
    reference + Duration::days(ripeness_days + shelf_days)
}

/// Two distinct hour marks in [0, HOURS_IN_DAY), ordered ascending. The
/// second draw is repeated on collision, then the pair is sorted.
pub fn sample_hour_window(rng: &mut impl Rng) -> (u8, u8) {
    let first = rng.gen_range(0..HOURS_IN_DAY);
    let mut second = rng.gen_range(0..HOURS_IN_DAY);
    while second == first {
        second = rng.gen_range(0..HOURS_IN_DAY);
    }

    (first.min(second), first.max(second))
}

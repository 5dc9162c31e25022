use chrono::Local;
use rand::Rng;
use tracing::info;

use crate::config::constant::DEPOT_PROBABILITY;
use crate::domain::types::LocationRecord;
use crate::error::GenError;
use crate::generator::fields::{sample_service_fields, ServiceFields};
use crate::generator::geo::random_point_within_radius;

/// Generates `num_records` location rows around `(center_lat, center_lon)`.
///
/// - Row `L001` is the fixed depot at exactly the center coordinate.
/// - Each following row is sampled within `radius_miles` of the center and
///   independently becomes an extra depot with probability 0.10.
///
/// Coordinates are unvalidated pass-through; out-of-range centers flow into
/// the projection unchanged.
pub fn generate_locations(
    num_records: usize,
    center_lat: f64,
    center_lon: f64,
    radius_miles: f64,
    rng: &mut impl Rng,
) -> Result<Vec<LocationRecord>, GenError> {
    if num_records < 1 {
        return Err(GenError::InvalidArgument(
            "num_records must be at least 1".to_string(),
        ));
    }
    if radius_miles < 0.0 {
        return Err(GenError::InvalidArgument(format!(
            "radius_miles must be non-negative, got {radius_miles}"
        )));
    }

    let reference_date = Local::now().date_naive();
    let mut records = Vec::with_capacity(num_records);

    // Fixed depot at exactly the requested center, unrounded so it compares
    // equal to the caller's input.
    let depot_fields = sample_service_fields(rng, reference_date);
    records.push(build_record(
        "L001".to_string(),
        center_lat,
        center_lon,
        true,
        depot_fields,
    ));

    for i in 2..=num_records {
        let (lat, lon) = random_point_within_radius(rng, center_lat, center_lon, radius_miles);
        let is_depot = rng.gen::<f64>() < DEPOT_PROBABILITY;
        let fields = sample_service_fields(rng, reference_date);

        records.push(build_record(
            format!("L{i:03}"),
            round6(lat),
            round6(lon),
            is_depot,
            fields,
        ));
    }

    let depot_count = records.iter().filter(|r| r.is_depot).count();
    info!(
        "Generated {} locations ({} depots) within {} miles of ({}, {})",
        records.len(),
        depot_count,
        radius_miles,
        center_lat,
        center_lon
    );

    Ok(records)
}

fn build_record(
    id: String,
    latitude: f64,
    longitude: f64,
    is_depot: bool,
    fields: ServiceFields,
) -> LocationRecord {
    LocationRecord {
        id,
        latitude,
        longitude,
        is_depot,
        demand: fields.demand,
        product_type: fields.product_type,
        temperature_requirement: fields.temperature_requirement,
        ripeness_or_expiration: fields.ripeness_or_expiration,
        packaging: fields.packaging,
        handling_notes: fields.handling_notes,
        time_window_start: fields.time_window_start,
        time_window_end: fields.time_window_end,
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

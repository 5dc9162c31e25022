use itertools::Itertools;
use rand::Rng;
use tracing::{debug, info};

use crate::config::constant::{MAX_CAPACITY_BOXES, MIN_CAPACITY_BOXES, VEHICLE_RATIO};
use crate::domain::types::{LocationRecord, VehicleRecord};
use crate::error::GenError;
use crate::generator::fields::sample_hour_window;

/// Generates the vehicle fleet for a finalized location set.
///
/// Fleet size is `ceil(0.30 * locations.len())`, never below one. Each
/// vehicle starts at a random depot, chosen with replacement. Depot flags are
/// taken as-is from the input and never re-derived here.
pub fn generate_vehicles(
    locations: &[LocationRecord],
    rng: &mut impl Rng,
) -> Result<Vec<VehicleRecord>, GenError> {
    let depot_ids: Vec<&str> = locations
        .iter()
        .filter(|loc| loc.is_depot)
        .map(|loc| loc.id.as_str())
        .collect();

    if depot_ids.is_empty() {
        return Err(GenError::InvalidState(
            "no depot in locations data; cannot generate vehicles".to_string(),
        ));
    }
    debug!("Depot subset: {}", depot_ids.iter().join(", "));

    let num_vehicles = ((VEHICLE_RATIO * locations.len() as f64).ceil() as usize).max(1);

    let mut vehicles = Vec::with_capacity(num_vehicles);
    for i in 1..=num_vehicles {
        let start_location_id = depot_ids[rng.gen_range(0..depot_ids.len())].to_string();
        let capacity = rng.gen_range(MIN_CAPACITY_BOXES..=MAX_CAPACITY_BOXES);
        let (availability_start, availability_end) = sample_hour_window(rng);

        vehicles.push(VehicleRecord {
            id: format!("V{i:03}"),
            start_location_id,
            capacity,
            availability_start,
            availability_end,
        });
    }

    info!(
        "Generated {} vehicles over {} depots for {} locations",
        vehicles.len(),
        depot_ids.len(),
        locations.len()
    );

    Ok(vehicles)
}

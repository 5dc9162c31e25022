use std::fs;
use std::path::PathBuf;

use chrono::{Duration, Local};
use csv::ReaderBuilder;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use agrigen::generator::geo::haversine_miles;
use agrigen::generator::locations::generate_locations;
use agrigen::generator::vehicles::generate_vehicles;
use agrigen::output::csv_writer::{write_locations, write_vehicles};

// Fresno, CA: a plausible agricultural hub for the synthetic data.
const CENTER_LAT: f64 = 36.7378;
const CENTER_LON: f64 = -119.7871;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("agrigen_{}_{}", std::process::id(), name))
}

#[test]
fn location_count_and_fixed_depot_hold_for_all_sizes() {
    for n in [1, 2, 7, 20, 101] {
        let locations = generate_locations(n, CENTER_LAT, CENTER_LON, 15.0, &mut rng(1)).unwrap();
        assert_eq!(locations.len(), n);
        assert_eq!(locations[0].id, "L001");
        assert!(locations[0].is_depot);
        assert_eq!(locations[0].latitude, CENTER_LAT);
        assert_eq!(locations[0].longitude, CENTER_LON);
    }
}

#[test]
fn sampled_rows_stay_within_the_radius() {
    let radius = 25.0;
    let locations = generate_locations(300, CENTER_LAT, CENTER_LON, radius, &mut rng(2)).unwrap();

    for loc in &locations[1..] {
        let dist = haversine_miles(CENTER_LAT, CENTER_LON, loc.latitude, loc.longitude);
        assert!(dist <= radius + 1e-3, "{} landed {} miles out", loc.id, dist);
    }
}

#[test]
fn zero_radius_pins_every_row_to_the_center() {
    let locations = generate_locations(30, CENTER_LAT, CENTER_LON, 0.0, &mut rng(3)).unwrap();

    for loc in &locations {
        assert!((loc.latitude - CENTER_LAT).abs() < 5e-7);
        assert!((loc.longitude - CENTER_LON).abs() < 5e-7);
    }
}

#[test]
fn depot_flag_frequency_approximates_ten_percent() {
    let locations =
        generate_locations(10_001, CENTER_LAT, CENTER_LON, 30.0, &mut rng(4)).unwrap();

    let depot_count = locations[1..].iter().filter(|loc| loc.is_depot).count();
    // Seeded run; true mean 1000, sigma roughly 30.
    assert!(
        (800..=1200).contains(&depot_count),
        "depot frequency drifted: {depot_count} of 10000"
    );
}

#[test]
fn service_fields_respect_their_domains() {
    let today = Local::now().date_naive();
    let locations = generate_locations(200, CENTER_LAT, CENTER_LON, 10.0, &mut rng(5)).unwrap();

    for loc in &locations {
        assert!((1..=25).contains(&loc.demand));
        assert!(loc.time_window_start < loc.time_window_end);
        assert!(loc.time_window_end <= 23);
        // Ripeness offset 0..=3 plus shelf life 2..=7; one day of slack in
        // case the generator ran just before midnight.
        assert!(loc.ripeness_or_expiration >= today + Duration::days(1));
        assert!(loc.ripeness_or_expiration <= today + Duration::days(11));
    }
}

#[test]
fn fleet_size_follows_the_location_count() {
    for (n, expected) in [(1, 1), (2, 1), (10, 3), (20, 6), (33, 10)] {
        let locations = generate_locations(n, CENTER_LAT, CENTER_LON, 15.0, &mut rng(6)).unwrap();
        let vehicles = generate_vehicles(&locations, &mut rng(7)).unwrap();
        assert_eq!(vehicles.len(), expected, "for {n} locations");
    }
}

#[test]
fn vehicles_reference_depots_and_respect_bounds() {
    let locations = generate_locations(60, CENTER_LAT, CENTER_LON, 15.0, &mut rng(8)).unwrap();
    let vehicles = generate_vehicles(&locations, &mut rng(9)).unwrap();

    for (i, vehicle) in vehicles.iter().enumerate() {
        assert_eq!(vehicle.id, format!("V{:03}", i + 1));

        let start = locations
            .iter()
            .find(|loc| loc.id == vehicle.start_location_id)
            .expect("start location must exist in the location table");
        assert!(start.is_depot);

        assert!((100..=500).contains(&vehicle.capacity));
        assert!(vehicle.availability_start < vehicle.availability_end);
        assert!(vehicle.availability_end <= 23);
    }
}

#[test]
fn single_location_still_yields_a_referencing_vehicle() {
    let locations = generate_locations(1, CENTER_LAT, CENTER_LON, 15.0, &mut rng(10)).unwrap();
    let vehicles = generate_vehicles(&locations, &mut rng(11)).unwrap();

    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].start_location_id, "L001");
}

#[test]
fn identical_seeds_reproduce_both_tables() {
    let mut first = rng(42);
    let locations_a = generate_locations(25, CENTER_LAT, CENTER_LON, 18.0, &mut first).unwrap();
    let vehicles_a = generate_vehicles(&locations_a, &mut first).unwrap();

    let mut second = rng(42);
    let locations_b = generate_locations(25, CENTER_LAT, CENTER_LON, 18.0, &mut second).unwrap();
    let vehicles_b = generate_vehicles(&locations_b, &mut second).unwrap();

    assert_eq!(locations_a, locations_b);
    assert_eq!(vehicles_a, vehicles_b);
}

#[test]
fn written_files_carry_the_contract_headers_and_row_counts() {
    let mut stream = rng(99);
    let locations = generate_locations(20, CENTER_LAT, CENTER_LON, 15.0, &mut stream).unwrap();
    let vehicles = generate_vehicles(&locations, &mut stream).unwrap();

    let loc_path = temp_path("locations.csv");
    let veh_path = temp_path("vehicles.csv");
    write_locations(&loc_path, &locations).unwrap();
    write_vehicles(&veh_path, &vehicles).unwrap();

    let mut reader = ReaderBuilder::new().from_path(&loc_path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(
        headers,
        [
            "id",
            "latitude",
            "longitude",
            "is_depot",
            "demand",
            "product_type",
            "temperature_requirement",
            "ripeness_or_expiration",
            "packaging",
            "handling_notes",
            "time_window_start",
            "time_window_end"
        ]
    );
    assert_eq!(reader.records().count(), 20);

    let mut reader = ReaderBuilder::new().from_path(&veh_path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(
        headers,
        ["id", "start_location_id", "capacity", "availability_start", "availability_end"]
    );
    assert_eq!(reader.records().count(), 6);

    fs::remove_file(&loc_path).ok();
    fs::remove_file(&veh_path).ok();
}

#[test]
fn identical_seeds_write_byte_identical_files() {
    let runs = [
        (temp_path("run_a_locations.csv"), temp_path("run_a_vehicles.csv")),
        (temp_path("run_b_locations.csv"), temp_path("run_b_vehicles.csv")),
    ];

    for (loc_path, veh_path) in &runs {
        let mut stream = rng(7);
        let locations =
            generate_locations(15, CENTER_LAT, CENTER_LON, 12.0, &mut stream).unwrap();
        let vehicles = generate_vehicles(&locations, &mut stream).unwrap();

        write_locations(loc_path, &locations).unwrap();
        write_vehicles(veh_path, &vehicles).unwrap();
    }

    assert_eq!(fs::read(&runs[0].0).unwrap(), fs::read(&runs[1].0).unwrap());
    assert_eq!(fs::read(&runs[0].1).unwrap(), fs::read(&runs[1].1).unwrap());

    for (loc_path, veh_path) in &runs {
        fs::remove_file(loc_path).ok();
        fs::remove_file(veh_path).ok();
    }
}

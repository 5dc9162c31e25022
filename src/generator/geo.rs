use rand::Rng;

use crate::config::constant::EARTH_RADIUS_MILES;

/// Samples a random point at most `radius_miles` from the center: a uniform
/// distance in [0, radius] and a uniform bearing in [0, 2pi), projected with
/// the great-circle offset formulas on a spherical earth.
///
/// Returns (latitude, longitude) in decimal degrees.
pub fn random_point_within_radius(
    rng: &mut impl Rng,
    lat_center: f64,
    lon_center: f64,
    radius_miles: f64,
) -> (f64, f64) {
    let distance_miles = rng.gen_range(0.0..=radius_miles);
    let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
    let theta = distance_miles / EARTH_RADIUS_MILES;

    let lat0 = lat_center.to_radians();
    let lon0 = lon_center.to_radians();

    let lat_new =
        (lat0.sin() * theta.cos() + lat0.cos() * theta.sin() * bearing.cos()).asin();
    let lon_new = lon0
        + (bearing.sin() * theta.sin() * lat0.cos())
            .atan2(theta.cos() - lat0.sin() * lat_new.sin());

    (lat_new.to_degrees(), lon_new.to_degrees())
}

/// Great-circle distance in miles between two coordinates.
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_MILES * a.sqrt().asin()
}

pub mod constant {
    // Probability that a sampled location (beyond the fixed first row) is a depot
    pub(crate) const DEPOT_PROBABILITY: f64 = 0.10;

    // Mean Earth radius used for the spherical offset projection
    pub(crate) const EARTH_RADIUS_MILES: f64 = 3958.8;

    // Fleet size as a fraction of the location count, rounded up
    pub(crate) const VEHICLE_RATIO: f64 = 0.30;

    // Per-location demand bounds (boxes)
    pub(crate) const MIN_DEMAND_BOXES: u32 = 1;
    pub(crate) const MAX_DEMAND_BOXES: u32 = 25;

    // Vehicle capacity bounds (boxes)
    pub(crate) const MIN_CAPACITY_BOXES: u32 = 100;
    pub(crate) const MAX_CAPACITY_BOXES: u32 = 500;

    // Hour marks for time windows and availability (0 through 23)
    pub(crate) const HOURS_IN_DAY: u8 = 24;

    // Consulted for the RNG seed when no --seed flag is given
    pub(crate) const SEED_ENV_VAR: &str = "AGRIGEN_SEED";
}

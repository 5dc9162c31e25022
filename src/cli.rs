use std::env;
use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use dotenv::dotenv;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::SEED_ENV_VAR;
use crate::generator::locations::generate_locations;
use crate::generator::vehicles::generate_vehicles;
use crate::output::csv_writer::{write_locations, write_vehicles};

/// Generate two CSVs: locations.csv and vehicles.csv.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Total number of location rows to generate (including the fixed depot)
    #[arg(short = 'n', long)]
    pub num_records: usize,

    /// Center latitude (decimal degrees) for the fixed depot
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Center longitude (decimal degrees) for the fixed depot
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Radius in miles around the center for random location points
    #[arg(long, allow_negative_numbers = true)]
    pub radius: f64,

    /// Filename for the locations CSV
    #[arg(long, default_value = "locations.csv")]
    pub locations_output: PathBuf,

    /// Filename for the vehicles CSV
    #[arg(long, default_value = "vehicles.csv")]
    pub vehicles_output: PathBuf,

    /// RNG seed for reproducible output (falls back to AGRIGEN_SEED, then OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Initialize tracing and environment
fn init_tracing_and_env() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    dotenv().ok();
}

/// Resolve the RNG: --seed flag first, then AGRIGEN_SEED, then OS entropy.
fn build_rng(cli_seed: Option<u64>) -> ChaCha8Rng {
    let seed = cli_seed.or_else(|| match env::var(SEED_ENV_VAR) {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!("{} is set but not a valid u64, ignoring: {}", SEED_ENV_VAR, raw);
                None
            }
        },
        Err(_) => None,
    });

    match seed {
        Some(seed) => {
            info!("Seeding RNG with {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env();
    let args = Args::parse();

    info!(
        "Generating {} locations within {} miles of ({}, {})",
        args.num_records, args.radius, args.lat, args.lon
    );

    let mut rng = build_rng(args.seed);

    // Locations must be finalized before the first vehicle draw: the fleet
    // size and the start depots both derive from the finished location set.
    let locations =
        generate_locations(args.num_records, args.lat, args.lon, args.radius, &mut rng)?;
    let vehicles = generate_vehicles(&locations, &mut rng)?;

    write_locations(&args.locations_output, &locations)?;
    write_vehicles(&args.vehicles_output, &vehicles)?;

    println!(
        "{}",
        format!(
            "Wrote {} locations to {}",
            locations.len(),
            args.locations_output.display()
        )
        .green()
    );
    println!(
        "{}",
        format!(
            "Wrote {} vehicles to {} (30% of {} locations, rounded up)",
            vehicles.len(),
            args.vehicles_output.display(),
            locations.len()
        )
        .green()
    );

    Ok(())
}

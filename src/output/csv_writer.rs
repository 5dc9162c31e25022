use std::path::Path;

use csv::Writer;
use serde::Serialize;
use tracing::info;

use crate::domain::types::{LocationRecord, VehicleRecord};
use crate::error::GenError;

/// Writes the location table. The header row comes from the record's field
/// names, in declaration order.
pub fn write_locations(path: &Path, records: &[LocationRecord]) -> Result<(), GenError> {
    write_records(path, records)?;
    info!("Wrote {} locations to {}", records.len(), path.display());
    Ok(())
}

/// Writes the vehicle table.
pub fn write_vehicles(path: &Path, records: &[VehicleRecord]) -> Result<(), GenError> {
    write_records(path, records)?;
    info!("Wrote {} vehicles to {}", records.len(), path.display());
    Ok(())
}

fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), GenError> {
    let mut wtr = Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// One row of `locations.csv`. Field order is the column order of the file,
/// and field names are the header row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_depot: bool,
    pub demand: u32,
    pub product_type: ProductType,
    pub temperature_requirement: TemperatureRequirement,
    #[serde(serialize_with = "mmddyyyy")]
    pub ripeness_or_expiration: NaiveDate,
    pub packaging: Packaging,
    pub handling_notes: HandlingNote,
    #[serde(serialize_with = "hour_mark")]
    pub time_window_start: u8,
    #[serde(serialize_with = "hour_mark")]
    pub time_window_end: u8,
}

/// One row of `vehicles.csv`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRecord {
    pub id: String,
    pub start_location_id: String,
    pub capacity: u32,
    #[serde(serialize_with = "hour_mark")]
    pub availability_start: u8,
    #[serde(serialize_with = "hour_mark")]
    pub availability_end: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProductType {
    Leafy,
    Dairy,
    Herbs,
    Meat,
    Fruit,
}

impl ProductType {
    pub const ALL: [ProductType; 5] = [
        ProductType::Leafy,
        ProductType::Dairy,
        ProductType::Herbs,
        ProductType::Meat,
        ProductType::Fruit,
    ];

    /// Storage class implied by the product: meat ships frozen, dairy and
    /// leafy greens need the cold chain, herbs and fruit travel ambient.
    pub fn temperature_requirement(self) -> TemperatureRequirement {
        match self {
            ProductType::Meat => TemperatureRequirement::Frozen,
            ProductType::Dairy | ProductType::Leafy => TemperatureRequirement::Refrigerated,
            ProductType::Herbs | ProductType::Fruit => TemperatureRequirement::Ambient,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemperatureRequirement {
    Frozen,
    Refrigerated,
    Ambient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Packaging {
    Crate,
    Box,
    Pallet,
}

impl Packaging {
    pub const ALL: [Packaging; 3] = [Packaging::Crate, Packaging::Box, Packaging::Pallet];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HandlingNote {
    Fragile,
    #[serde(rename = "Keep Upright")]
    KeepUpright,
    None,
}

impl HandlingNote {
    pub const ALL: [HandlingNote; 3] =
        [HandlingNote::Fragile, HandlingNote::KeepUpright, HandlingNote::None];
}

fn mmddyyyy<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.format("%m/%d/%Y").to_string())
}

fn hour_mark<S: Serializer>(hour: &u8, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{hour:02}:00"))
}

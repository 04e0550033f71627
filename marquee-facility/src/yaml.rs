//! YAML fixture loading.
//!
//! Seed data lives as one YAML file per cinema, with rooms, equipment, and
//! inventory nested under it. The loader only parses; inserting the rows is
//! the persistence layer's job.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    EquipmentCategory, EquipmentStatus, PreventiveSchedule, ProjectorLamp, RoomStatus, Seating,
};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Fixture directory not found: {0}")]
    DirNotFound(String),
}

/// A cinema with its nested seed data, as read from one fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinemaFixture {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub rooms: Vec<RoomFixture>,
    #[serde(default)]
    pub inventory: Vec<InventoryFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomFixture {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: RoomStatus,
    #[serde(default)]
    pub status_reason: Option<String>,
    #[serde(default)]
    pub screen_type: Option<String>,
    #[serde(default)]
    pub sound_system: Option<String>,
    #[serde(default)]
    pub seating: Option<Seating>,
    #[serde(default)]
    pub lamp: Option<ProjectorLamp>,
    #[serde(default)]
    pub preventive: PreventiveSchedule,
    #[serde(default)]
    pub equipment: Vec<EquipmentFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentFixture {
    pub name: String,
    pub description: String,
    pub category: EquipmentCategory,
    #[serde(default)]
    pub status: EquipmentStatus,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub install_date: Option<i64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub next_maintenance: Option<i64>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub lumens: Option<i64>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub lamp_hours: Option<i64>,
    #[serde(default)]
    pub max_lamp_hours: Option<i64>,
    #[serde(default)]
    pub channels: Option<i64>,
    #[serde(default)]
    pub power: Option<i64>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub capacity_btu: Option<i64>,
    #[serde(default)]
    pub temperature_range: Option<String>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub ip_range: Option<String>,
    #[serde(default)]
    pub port_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryFixture {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub min_quantity: Option<i64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Load every `.yaml`/`.yml` file in `dir`, one `CinemaFixture` per file,
/// sorted by file name so seeding is deterministic.
pub fn load_fixtures(dir: &Path) -> Result<Vec<CinemaFixture>, FixtureError> {
    if !dir.is_dir() {
        return Err(FixtureError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| FixtureError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut fixtures = Vec::new();
    for entry in entries {
        let path = entry.path();
        let contents = std::fs::read_to_string(&path).map_err(|e| FixtureError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let fixture: CinemaFixture =
            serde_yml::from_str(&contents).map_err(|e| FixtureError::Parse {
                path: path.display().to_string(),
                source: e,
            })?;
        fixtures.push(fixture);
    }

    Ok(fixtures)
}

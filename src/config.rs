/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{info, warn};
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Building, Error, Result};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML, everything else is read as JSON.
    pub fn from_path(path: &Path) -> ConfigFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_building(path: &Path) -> Result<Building> {
    let config_str = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let building = parse_building(&config_str, ConfigFormat::from_path(path))?;

    info!(
        "Loaded building from {}: floors {}..={}, {} elevators",
        path.display(),
        building.min_floor,
        building.max_floor,
        building.number_of_elevators()
    );
    Ok(building)
}

/**
 * Parses and validates a building description.
 *
 * Elevators whose floor range reaches outside the building are kept as they are,
 * since the allocator never looks at floors, but a warning is logged for each.
 */
pub fn parse_building(config_str: &str, format: ConfigFormat) -> Result<Building> {
    let building: Building = match format {
        ConfigFormat::Json => serde_json::from_str(config_str)?,
        ConfigFormat::Toml => toml::from_str(config_str)?,
    };
    building.validate()?;

    for elevator in &building.elevators {
        if elevator.min_floor < building.min_floor || elevator.max_floor > building.max_floor {
            warn!(
                "Elevator {} serves floors {}..={}, outside the building range {}..={}",
                elevator.id,
                elevator.min_floor,
                elevator.max_floor,
                building.min_floor,
                building.max_floor
            );
        }
    }
    Ok(building)
}

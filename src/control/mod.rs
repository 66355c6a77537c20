pub mod control_tests;

/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::path::PathBuf;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::allocator::{allocate_with_report, AllocationReport};
use crate::calls::{read_calls, write_calls};
use crate::config::load_building;
use crate::shared::Result;

/**
 * The three files a run works on.
 *
 * # Fields
 * - `building`:    Building description, JSON or TOML.
 * - `calls_in`:    Call records to allocate.
 * - `calls_out`:   Destination of the allocated call records.
 */
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub building: PathBuf,
    pub calls_in: PathBuf,
    pub calls_out: PathBuf,
}

/// Loads the building and calls, allocates, and writes the result.
///
/// Nothing is written unless every earlier step succeeded.
pub fn run_offline(paths: &RunPaths) -> Result<AllocationReport> {
    let building = load_building(&paths.building)?;
    let calls = read_calls(&paths.calls_in)?;
    let (allocated, report) = allocate_with_report(&building, &calls)?;
    write_calls(&paths.calls_out, &allocated)?;
    Ok(report)
}

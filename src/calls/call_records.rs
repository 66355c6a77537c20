/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ElevatorCall, Error, Result, UNALLOCATED};

/// Number of columns in a call record.
pub const CALL_RECORD_COLUMNS: usize = 6;

/// Label written in the first column of every output record.
pub const CALL_LABEL: &str = "Elevator call";

/***************************************/
/*          Record schemas             */
/***************************************/

/**
 * One row of an input call file.
 *
 * Columns, in order: label, time of call, source floor, destination floor,
 * an unused status column, and the elevator the call is allocated to (`-1` if none).
 */
#[derive(Debug, Deserialize)]
struct InputRecord {
    _label: IgnoredAny,
    time_of_call: f64,
    source: i32,
    destination: i32,
    _unused: IgnoredAny,
    allocated_to_elevator: i64,
}

impl InputRecord {
    fn into_call(self, index: usize) -> Result<ElevatorCall> {
        let allocated_to_elevator = match self.allocated_to_elevator {
            UNALLOCATED => None,
            id if id >= 0 => Some(id as usize),
            id => {
                return Err(Error::InvalidCall {
                    index,
                    reason: format!("allocation {} is neither {} nor an elevator id", id, UNALLOCATED),
                })
            }
        };
        Ok(ElevatorCall {
            time_of_call: self.time_of_call,
            source: self.source,
            destination: self.destination,
            allocated_to_elevator,
        })
    }
}

/// One row of an output call file. Same column layout as `InputRecord`.
#[derive(Debug, Serialize)]
struct OutputRecord<'a> {
    label: &'a str,
    time_of_call: String,
    source: i32,
    destination: i32,
    unused: &'a str,
    allocated_to_elevator: i64,
}

impl<'a> From<&'a ElevatorCall> for OutputRecord<'a> {
    fn from(call: &'a ElevatorCall) -> Self {
        OutputRecord {
            label: CALL_LABEL,
            // Debug keeps the fractional part of whole numbers ("12.0", not "12")
            time_of_call: format!("{:?}", call.time_of_call),
            source: call.source,
            destination: call.destination,
            unused: "0",
            allocated_to_elevator: call
                .allocated_to_elevator
                .map_or(UNALLOCATED, |id| id as i64),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn read_calls(path: &Path) -> Result<Vec<ElevatorCall>> {
    let file = fs::File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let calls = parse_calls(file, path)?;

    let preallocated = calls.iter().filter(|call| call.is_allocated()).count();
    info!(
        "Loaded {} calls from {} ({} pre-allocated)",
        calls.len(),
        path.display(),
        preallocated
    );
    Ok(calls)
}

/**
 * Parses headerless call records from `reader`.
 *
 * `origin` only names the source in error messages. Fields are trimmed, blank lines
 * are skipped, and every record must have exactly `CALL_RECORD_COLUMNS` columns.
 */
pub fn parse_calls<R: Read>(reader: R, origin: &Path) -> Result<Vec<ElevatorCall>> {
    let csv_error = |source: csv::Error| Error::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut calls = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(csv_error)?;
        if record.len() != CALL_RECORD_COLUMNS {
            return Err(Error::ColumnCount {
                line: record.position().map_or(index as u64 + 1, |pos| pos.line()),
                expected: CALL_RECORD_COLUMNS,
                found: record.len(),
            });
        }
        let row: InputRecord = record.deserialize(None).map_err(csv_error)?;
        calls.push(row.into_call(index)?);
    }
    Ok(calls)
}

/// Writes `calls` to `path`, replacing any existing file.
pub fn write_calls(path: &Path, calls: &[ElevatorCall]) -> Result<()> {
    let bytes = serialize_calls(calls).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, bytes).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {} calls to {}", calls.len(), path.display());
    Ok(())
}

/// Serializes `calls` as CRLF-terminated records without a header row.
pub fn serialize_calls(calls: &[ElevatorCall]) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    for call in calls {
        writer.serialize(OutputRecord::from(call))?;
    }
    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}

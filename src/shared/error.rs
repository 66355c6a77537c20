/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed building description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed building description: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid building description: {0}")]
    InvalidConfig(String),

    #[error("malformed call records in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("call record on line {line} has {found} columns, expected {expected}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("invalid call at index {index}: {reason}")]
    InvalidCall { index: usize, reason: String },

    #[error("call list is empty, nothing to allocate")]
    EmptyCallList,

    #[error(
        "elevator {elevator} (weight {weight:.4}) gets a target of 0 out of {n_calls} calls, \
         stride is undefined (division by zero)"
    )]
    ZeroTargetCount {
        elevator: usize,
        weight: f64,
        n_calls: usize,
    },
}

pub mod error;
pub mod macros;
pub mod structs;
pub mod structs_tests;

pub use error::Error;
pub use error::Result;
pub use structs::Building;
pub use structs::Elevator;
pub use structs::ElevatorCall;
pub use structs::UNALLOCATED;

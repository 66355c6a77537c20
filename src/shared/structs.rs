/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::error::{Error, Result};

/// Value of the allocation column for a call no elevator has been given yet.
pub const UNALLOCATED: i64 = -1;

/***************************************/
/*       Public data structures        */
/***************************************/

/**
 * A single elevator of the building.
 *
 * Only `id` and `speed` take part in the allocation. The floor range and the door and
 * motion timings are carried through so the building description stays complete.
 *
 * # Fields
 * - `id`:          Dense, zero-based index of the elevator within its building.
 * - `speed`:       Relative speed, must be positive.
 * - `min_floor`:   Lowest floor served.
 * - `max_floor`:   Highest floor served.
 * - `close_time`:  Time to close the doors.
 * - `open_time`:   Time to open the doors.
 * - `start_time`:  Time to accelerate from a stop.
 * - `stop_time`:   Time to decelerate to a stop.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Elevator {
    #[serde(rename = "_id", alias = "id")]
    pub id: usize,
    #[serde(rename = "_speed", alias = "speed")]
    pub speed: f64,
    #[serde(rename = "_minFloor", alias = "min_floor")]
    pub min_floor: i32,
    #[serde(rename = "_maxFloor", alias = "max_floor")]
    pub max_floor: i32,
    #[serde(rename = "_closeTime", alias = "close_time")]
    pub close_time: f64,
    #[serde(rename = "_openTime", alias = "open_time")]
    pub open_time: f64,
    #[serde(rename = "_startTime", alias = "start_time")]
    pub start_time: f64,
    #[serde(rename = "_stopTime", alias = "stop_time")]
    pub stop_time: f64,
}

impl Elevator {
    /// Elevator with the given id and speed, serving `min_floor..=max_floor`, all timings zero.
    pub fn new(id: usize, speed: f64, min_floor: i32, max_floor: i32) -> Elevator {
        Elevator {
            id,
            speed,
            min_floor,
            max_floor,
            close_time: 0.0,
            open_time: 0.0,
            start_time: 0.0,
            stop_time: 0.0,
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "elevator {} has speed {}, expected a positive number",
                self.id, self.speed
            )));
        }
        let timings = [
            ("close_time", self.close_time),
            ("open_time", self.open_time),
            ("start_time", self.start_time),
            ("stop_time", self.stop_time),
        ];
        for (name, value) in timings {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "elevator {} has {} {}, expected a non-negative number",
                    self.id, name, value
                )));
            }
        }
        if self.min_floor > self.max_floor {
            return Err(Error::InvalidConfig(format!(
                "elevator {} has min_floor {} above max_floor {}",
                self.id, self.min_floor, self.max_floor
            )));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Building {
    #[serde(rename = "_minFloor", alias = "min_floor")]
    pub min_floor: i32,
    #[serde(rename = "_maxFloor", alias = "max_floor")]
    pub max_floor: i32,
    #[serde(rename = "_elevators", alias = "elevators")]
    pub elevators: Vec<Elevator>,
}

impl Building {
    pub fn new(min_floor: i32, max_floor: i32, elevators: Vec<Elevator>) -> Building {
        Building {
            min_floor,
            max_floor,
            elevators,
        }
    }

    pub fn number_of_elevators(&self) -> usize {
        self.elevators.len()
    }

    /**
     * Checks the building against the contract the allocator relies on.
     *
     * The building needs at least one elevator, every elevator must be valid on its own,
     * and the ids must cover `0..number_of_elevators()` exactly once each, since the
     * allocator uses them as indices.
     */
    pub fn validate(&self) -> Result<()> {
        if self.elevators.is_empty() {
            return Err(Error::InvalidConfig("building has no elevators".to_string()));
        }
        if self.min_floor > self.max_floor {
            return Err(Error::InvalidConfig(format!(
                "building min_floor {} is above max_floor {}",
                self.min_floor, self.max_floor
            )));
        }

        let count = self.number_of_elevators();
        let mut seen = vec![false; count];
        for elevator in &self.elevators {
            elevator.validate()?;
            if elevator.id >= count {
                return Err(Error::InvalidConfig(format!(
                    "elevator id {} is out of range, ids must be 0..{}",
                    elevator.id, count
                )));
            }
            if seen[elevator.id] {
                return Err(Error::InvalidConfig(format!(
                    "elevator id {} appears more than once",
                    elevator.id
                )));
            }
            seen[elevator.id] = true;
        }
        Ok(())
    }
}

/**
 * A single elevator call.
 *
 * `allocated_to_elevator` is `None` until the allocator hands the call to an elevator.
 * Calls read with an elevator already set are pre-allocated and never touched.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorCall {
    pub time_of_call: f64,
    pub source: i32,
    pub destination: i32,
    pub allocated_to_elevator: Option<usize>,
}

impl ElevatorCall {
    pub fn new(time_of_call: f64, source: i32, destination: i32) -> ElevatorCall {
        ElevatorCall {
            time_of_call,
            source,
            destination,
            allocated_to_elevator: None,
        }
    }

    pub fn allocated(
        time_of_call: f64,
        source: i32,
        destination: i32,
        elevator: usize,
    ) -> ElevatorCall {
        ElevatorCall {
            allocated_to_elevator: Some(elevator),
            ..ElevatorCall::new(time_of_call, source, destination)
        }
    }

    pub fn is_allocated(&self) -> bool {
        self.allocated_to_elevator.is_some()
    }
}

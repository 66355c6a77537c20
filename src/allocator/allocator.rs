/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Building, Elevator, ElevatorCall, Error, Result};

/***************************************/
/*       Public data structures        */
/***************************************/

/**
 * How one elevator fared in the stride pass.
 *
 * # Fields
 * - `elevator`:        Id of the elevator.
 * - `speed`:           Speed of the elevator.
 * - `weight`:          Share of the total fleet speed, `speed / sum(speeds)`.
 * - `target_count`:    `floor(n_calls * weight)`, the number of calls the elevator should get.
 * - `stride`:          `floor(n_calls / target_count)`, the index step after each assignment.
 * - `assigned`:        Calls the stride pass gave to this elevator.
 * - `skipped`:         Indices stepped over one at a time because they were already taken.
 *
 * The pass always ends with `n_calls <= assigned * stride + skipped < n_calls + stride`,
 * which bounds how far `assigned` drifts from `target_count`.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorShare {
    pub elevator: usize,
    pub speed: f64,
    pub weight: f64,
    pub target_count: usize,
    pub stride: usize,
    pub assigned: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllocationReport {
    /// One entry per elevator, in the building's stored order.
    pub shares: Vec<ElevatorShare>,
    pub fallback_elevator: usize,
    /// Calls the stride pass missed, all given to `fallback_elevator`.
    pub fallback_assigned: usize,
    pub preallocated: usize,
}

/***************************************/
/*             Public API              */
/***************************************/

/// Allocates every unallocated call. See `allocate_with_report`.
pub fn allocate(building: &Building, calls: &[ElevatorCall]) -> Result<Vec<ElevatorCall>> {
    allocate_with_report(building, calls).map(|(allocated, _)| allocated)
}

/**
 * Allocates every unallocated call to an elevator, in proportion to elevator speed.
 *
 * Each elevator, in stored order, walks the whole call list from index 0. An unallocated
 * call is taken and the index jumps by the elevator's stride. A taken call is stepped
 * over by one. Whatever is left afterwards goes to the fastest elevator (the first one
 * on ties). Pre-allocated calls are never changed.
 *
 * The stride is computed from the full list length, not from what is still free.
 *
 * Fails before touching anything if the building or the calls are invalid, or if some
 * elevator's target count rounds down to zero. The input slice is never modified; the
 * result is a new list in the same order.
 */
pub fn allocate_with_report(
    building: &Building,
    calls: &[ElevatorCall],
) -> Result<(Vec<ElevatorCall>, AllocationReport)> {
    building.validate()?;
    validate_calls(building, calls)?;

    let n_calls = calls.len();
    let weights = compute_weights(building);
    let fallback = fastest_elevator(building)
        .ok_or_else(|| Error::InvalidConfig("building has no elevators".to_string()))?;
    let mut shares = plan_shares(building, &weights, n_calls)?;

    let mut allocated = calls.to_vec();
    let preallocated = allocated.iter().filter(|call| call.is_allocated()).count();

    for share in shares.iter_mut() {
        let (assigned, skipped) = stride_pass(&mut allocated, share.elevator, share.stride);
        share.assigned = assigned;
        share.skipped = skipped;
    }

    let mut fallback_assigned = 0;
    for (index, call) in allocated.iter_mut().enumerate() {
        if !call.is_allocated() {
            debug!("Call {} -> elevator {} (fallback)", index, fallback.id);
            call.allocated_to_elevator = Some(fallback.id);
            fallback_assigned += 1;
        }
    }

    let report = AllocationReport {
        shares,
        fallback_elevator: fallback.id,
        fallback_assigned,
        preallocated,
    };
    log_report(&report, n_calls);
    Ok((allocated, report))
}

/// `weights[id] = speed / sum(speeds)`, indexed by elevator id.
pub fn compute_weights(building: &Building) -> Vec<f64> {
    let total_speed: f64 = building.elevators.iter().map(|e| e.speed).sum();
    let mut weights = vec![0.0; building.number_of_elevators()];
    for elevator in &building.elevators {
        weights[elevator.id] = elevator.speed / total_speed;
    }
    weights
}

/// First elevator in stored order with the highest speed.
pub fn fastest_elevator(building: &Building) -> Option<&Elevator> {
    let mut fastest: Option<&Elevator> = None;
    for elevator in &building.elevators {
        match fastest {
            Some(current) if elevator.speed <= current.speed => {}
            _ => fastest = Some(elevator),
        }
    }
    fastest
}

/***************************************/
/*          Private functions          */
/***************************************/
fn validate_calls(building: &Building, calls: &[ElevatorCall]) -> Result<()> {
    if calls.is_empty() {
        return Err(Error::EmptyCallList);
    }
    let count = building.number_of_elevators();
    for (index, call) in calls.iter().enumerate() {
        if let Some(id) = call.allocated_to_elevator {
            if id >= count {
                return Err(Error::InvalidCall {
                    index,
                    reason: format!(
                        "pre-allocated to elevator {}, but the building only has elevators 0..{}",
                        id, count
                    ),
                });
            }
        }
    }
    Ok(())
}

fn plan_shares(building: &Building, weights: &[f64], n_calls: usize) -> Result<Vec<ElevatorShare>> {
    let mut shares = Vec::with_capacity(building.number_of_elevators());
    for elevator in &building.elevators {
        let weight = weights[elevator.id];
        let target_count = (n_calls as f64 * weight).floor() as usize;
        if target_count == 0 {
            return Err(Error::ZeroTargetCount {
                elevator: elevator.id,
                weight,
                n_calls,
            });
        }
        shares.push(ElevatorShare {
            elevator: elevator.id,
            speed: elevator.speed,
            weight,
            target_count,
            stride: n_calls / target_count,
            assigned: 0,
            skipped: 0,
        });
    }
    Ok(shares)
}

/// Returns `(assigned, skipped)`.
fn stride_pass(calls: &mut [ElevatorCall], elevator: usize, stride: usize) -> (usize, usize) {
    let mut assigned = 0;
    let mut skipped = 0;
    let mut i = 0;
    while i < calls.len() {
        if calls[i].is_allocated() {
            skipped += 1;
            i += 1;
        } else {
            debug!("Call {} -> elevator {}", i, elevator);
            calls[i].allocated_to_elevator = Some(elevator);
            assigned += 1;
            i += stride;
        }
    }
    (assigned, skipped)
}

fn log_report(report: &AllocationReport, n_calls: usize) {
    info!(
        "Allocated {} calls ({} pre-allocated)",
        n_calls, report.preallocated
    );
    for share in &report.shares {
        info!(
            "Elevator {}: speed {}, weight {:.4}, target {}, stride {}, assigned {}",
            share.elevator, share.speed, share.weight, share.target_count, share.stride, share.assigned
        );
    }
    info!(
        "Elevator {} took {} remaining calls as the fastest elevator",
        report.fallback_elevator, report.fallback_assigned
    );
}

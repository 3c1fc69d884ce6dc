/*!
 * Resource State
 * Available vector, claim matrices and the derived need matrix
 */

use super::matrix::Matrix;
use super::types::{StateError, StateResult};
use crate::core::types::{ProcessId, ResourceVector, Units};
use serde::Serialize;
use tracing::debug;

/// In-memory allocation snapshot for n processes and m resource types
///
/// `need` is kept equal to `max - allocation` by every mutation, including
/// the tentative phase of a request. `max` never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceState {
    available: ResourceVector,
    max: Matrix,
    allocation: Matrix,
    need: Matrix,
}

impl ResourceState {
    /// Build a state from raw rows
    ///
    /// The number of resource types is `available.len()` and the number of
    /// processes is the row count of `max`.
    pub fn new(
        available: Vec<Units>,
        max: Vec<Vec<Units>>,
        allocation: Vec<Vec<Units>>,
    ) -> StateResult<Self> {
        let width = available.len();
        let max = Matrix::from_rows("max", max, width)?;
        let allocation = Matrix::from_rows("allocation", allocation, width)?;

        if allocation.rows() != max.rows() {
            return Err(StateError::RowCountMismatch {
                expected: max.rows(),
                actual: allocation.rows(),
            });
        }

        let mut need = Matrix::zeros(max.rows(), width);
        for process in 0..max.rows() {
            for resource in 0..width {
                let claim = max.get(process, resource);
                let held = allocation.get(process, resource);
                if held > claim {
                    return Err(StateError::AllocationExceedsMax {
                        process,
                        resource,
                        allocated: held,
                        max: claim,
                    });
                }
                need.set(process, resource, claim - held);
            }
        }

        // Work vectors in the safety scan grow up to the total supply
        for (resource, &free) in available.iter().enumerate() {
            allocation
                .column_sum(resource)
                .and_then(|held| held.checked_add(free))
                .ok_or(StateError::SupplyOverflow(resource))?;
        }

        debug!(
            processes = max.rows(),
            resources = width,
            "Resource state constructed"
        );

        Ok(Self {
            available,
            max,
            allocation,
            need,
        })
    }

    #[inline]
    pub fn process_count(&self) -> usize {
        self.max.rows()
    }

    #[inline]
    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    pub fn available(&self) -> &[Units] {
        &self.available
    }

    pub fn max(&self) -> &Matrix {
        &self.max
    }

    pub fn allocation(&self) -> &Matrix {
        &self.allocation
    }

    pub fn need(&self) -> &Matrix {
        &self.need
    }

    /// Units currently held by `process`
    ///
    /// # Panics
    ///
    /// Panics if `process >= self.process_count()`.
    pub fn allocation_of(&self, process: ProcessId) -> &[Units] {
        self.allocation.row(process)
    }

    /// Units `process` may still request
    ///
    /// # Panics
    ///
    /// Panics if `process >= self.process_count()`.
    pub fn need_of(&self, process: ProcessId) -> &[Units] {
        self.need.row(process)
    }

    /// Available plus everything held, per resource type
    pub fn total_supply(&self) -> ResourceVector {
        self.available
            .iter()
            .enumerate()
            .map(|(resource, &free)| {
                self.allocation
                    .iter_rows()
                    .fold(free, |total, row| total + row[resource])
            })
            .collect()
    }

    /// Check allocation bounds and need consistency
    pub fn verify_invariants(&self) -> StateResult<()> {
        for process in 0..self.process_count() {
            for resource in 0..self.resource_count() {
                let claim = self.max.get(process, resource);
                let held = self.allocation.get(process, resource);
                if held > claim {
                    return Err(StateError::AllocationExceedsMax {
                        process,
                        resource,
                        allocated: held,
                        max: claim,
                    });
                }
                if self.need.get(process, resource) != claim - held {
                    return Err(StateError::NeedOutOfSync { process, resource });
                }
            }
        }
        Ok(())
    }

    /// Move `delta` from available into the allocation of `process`
    ///
    /// Pure arithmetic: the caller has already checked `delta <= need` and
    /// `delta <= available`.
    pub(crate) fn apply_delta(&mut self, process: ProcessId, delta: &[Units]) {
        debug_assert_eq!(delta.len(), self.resource_count());

        let allocation = self.allocation.row_mut(process);
        let need = self.need.row_mut(process);
        for (resource, &units) in delta.iter().enumerate() {
            self.available[resource] -= units;
            allocation[resource] += units;
            need[resource] -= units;
        }
    }

    /// Exact inverse of [`apply_delta`](Self::apply_delta) for the same delta
    ///
    /// The caller has already checked `delta <= allocation[process]`.
    pub(crate) fn revert_delta(&mut self, process: ProcessId, delta: &[Units]) {
        debug_assert_eq!(delta.len(), self.resource_count());

        let allocation = self.allocation.row_mut(process);
        let need = self.need.row_mut(process);
        for (resource, &units) in delta.iter().enumerate() {
            self.available[resource] += units;
            allocation[resource] -= units;
            need[resource] += units;
        }
    }
}

/*!
 * Safety Evaluator
 * Banker's safety algorithm over a resource state snapshot
 */

use super::config::ScanOrder;
use super::traits::SafetyCheck;
use super::types::SafetyReport;
use crate::core::types::{ProcessId, Units};
use crate::state::ResourceState;
use tracing::{debug, trace};

/// Safety algorithm with a configurable tie-break order
///
/// Simulates reclamation on a private work vector: the first unfinished
/// process (in scan order) whose need fits the work vector is assumed to run
/// to completion and hand back its allocation. The scan restarts from the top
/// of the order after every completion. The state is safe iff every process
/// finishes. O(n^2 * m).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafetyEvaluator {
    order: ScanOrder,
}

impl SafetyEvaluator {
    pub fn new(order: ScanOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &ScanOrder {
        &self.order
    }
}

impl SafetyCheck for SafetyEvaluator {
    fn check_safe(&self, state: &ResourceState) -> SafetyReport {
        let process_count = state.process_count();
        let order = self.order.resolve(process_count);
        let mut work = state.available().to_vec();
        let mut finished = vec![false; process_count];
        let mut sequence = Vec::with_capacity(process_count);

        while let Some(process) = order
            .iter()
            .copied()
            .find(|&process| !finished[process] && fits(state.need_of(process), &work))
        {
            for (slot, &held) in work.iter_mut().zip(state.allocation_of(process)) {
                *slot += held;
            }
            finished[process] = true;
            sequence.push(process);
            trace!(process, work = ?work, "Process can run to completion");
        }

        if sequence.len() == process_count {
            debug!(sequence = ?sequence, "State is safe");
            SafetyReport::safe(sequence)
        } else {
            let blocked: Vec<ProcessId> = order
                .into_iter()
                .filter(|&process| !finished[process])
                .collect();
            debug!(blocked = ?blocked, "State is unsafe");
            SafetyReport::unsafe_state(blocked)
        }
    }
}

/// Component-wise `demand <= supply`
#[inline]
pub(crate) fn fits(demand: &[Units], supply: &[Units]) -> bool {
    demand.iter().zip(supply).all(|(wanted, have)| wanted <= have)
}

/// First resource where `demand` exceeds `supply`
#[inline]
pub(crate) fn first_shortfall(demand: &[Units], supply: &[Units]) -> Option<usize> {
    demand.iter().zip(supply).position(|(wanted, have)| wanted > have)
}

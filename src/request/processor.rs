/*!
 * Request Processor
 * Validate, tentatively allocate, verify safety, commit or roll back
 */

use super::types::{RequestError, RequestOutcome, RequestResult};
use crate::core::types::{ProcessId, ResourceVector, Units};
use crate::safety::evaluator::first_shortfall;
use crate::safety::{SafetyCheck, SafetyEvaluator, SafetyReport};
use crate::state::ResourceState;
use tracing::{debug, debug_span, info, warn};

/// Banker's request protocol over a caller-owned resource state
///
/// The processor holds no state of its own besides the safety checker. The
/// state is borrowed mutably for one call only; callers that share a state
/// across threads must serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct RequestProcessor<C = SafetyEvaluator> {
    checker: C,
}

impl<C: SafetyCheck> RequestProcessor<C> {
    pub fn new(checker: C) -> Self {
        Self { checker }
    }

    pub fn checker(&self) -> &C {
        &self.checker
    }

    /// Run the configured safety check on `state`
    pub fn check_safe(&self, state: &ResourceState) -> SafetyReport {
        self.checker.check_safe(state)
    }

    /// Evaluate a request from `process`
    ///
    /// Checks `request <= need` and then `request <= available`, each failure
    /// leaving the state untouched. Otherwise the request is applied
    /// tentatively and kept only if the resulting state is safe; an unsafe
    /// result is reverted with the same request vector.
    pub fn request(
        &self,
        state: &mut ResourceState,
        process: ProcessId,
        request: &[Units],
    ) -> RequestResult<RequestOutcome> {
        let _span = debug_span!("request", process).entered();
        validate_target(state, process, request)?;

        let need = state.need_of(process);
        if let Some(resource) = first_shortfall(request, need) {
            let error = RequestError::ExceedsClaim {
                process,
                resource,
                requested: request[resource],
                need: need[resource],
            };
            warn!(request = ?request, error = %error, "Request exceeds claim");
            return Err(error);
        }

        let available = state.available();
        if let Some(resource) = first_shortfall(request, available) {
            let error = RequestError::InsufficientResources {
                process,
                resource,
                requested: request[resource],
                available: available[resource],
            };
            warn!(request = ?request, error = %error, "Not enough resources available");
            return Err(error);
        }

        state.apply_delta(process, request);
        debug!(request = ?request, "Tentative allocation applied");

        match self.checker.check_safe(state).into_sequence() {
            Some(sequence) => {
                info!(request = ?request, sequence = ?sequence, "Resources allocated");
                Ok(RequestOutcome::Granted(sequence))
            }
            None => {
                state.revert_delta(process, request);
                warn!(request = ?request, "Request would leave the system unsafe, rolled back");
                Ok(RequestOutcome::Unsafe)
            }
        }
    }

    /// Return `release` units held by `process` to the available pool
    ///
    /// Releasing can only grow the work vector of the safety scan, so no
    /// safety check is needed.
    pub fn release(
        &self,
        state: &mut ResourceState,
        process: ProcessId,
        release: &[Units],
    ) -> RequestResult<()> {
        let _span = debug_span!("release", process).entered();
        validate_target(state, process, release)?;

        let held = state.allocation_of(process);
        if let Some(resource) = first_shortfall(release, held) {
            let error = RequestError::ExceedsAllocation {
                process,
                resource,
                requested: release[resource],
                allocated: held[resource],
            };
            warn!(release = ?release, error = %error, "Release exceeds allocation");
            return Err(error);
        }

        state.revert_delta(process, release);
        info!(release = ?release, "Resources released");
        Ok(())
    }

    /// Release everything `process` holds, returning the released vector
    pub fn release_all(
        &self,
        state: &mut ResourceState,
        process: ProcessId,
    ) -> RequestResult<ResourceVector> {
        if process >= state.process_count() {
            return Err(RequestError::UnknownProcess {
                process,
                process_count: state.process_count(),
            });
        }

        let held = state.allocation_of(process).to_vec();
        self.release(state, process, &held)?;
        Ok(held)
    }
}

/// Reject calls naming a missing process or carrying a wrong-length vector
fn validate_target(
    state: &ResourceState,
    process: ProcessId,
    vector: &[Units],
) -> RequestResult<()> {
    if process >= state.process_count() {
        return Err(RequestError::UnknownProcess {
            process,
            process_count: state.process_count(),
        });
    }
    if vector.len() != state.resource_count() {
        return Err(RequestError::VectorLength {
            expected: state.resource_count(),
            actual: vector.len(),
        });
    }
    Ok(())
}

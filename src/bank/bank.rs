/*!
 * Bank
 * Owner of one resource state and its request processor
 */

use super::config::BankConfig;
use super::stats::BankStats;
use crate::core::errors::Result;
use crate::core::types::{ProcessId, ResourceVector, Units};
use crate::request::{RequestOutcome, RequestProcessor, RequestResult};
use crate::safety::{SafetyEvaluator, SafetyReport};
use crate::scenario::Scenario;
use crate::state::ResourceState;
use tracing::info;

/// Resource state bundled with the evaluator configured for it
///
/// Single-owner and synchronous. Wrap it in a
/// [`SharedBank`](super::SharedBank) to drive it from several threads.
#[derive(Debug, Clone)]
pub struct Bank {
    state: ResourceState,
    processor: RequestProcessor<SafetyEvaluator>,
    stats: BankStats,
}

impl Bank {
    pub fn new(state: ResourceState, config: &BankConfig) -> Self {
        Self::with_evaluator(state, SafetyEvaluator::new(config.scan_order.clone()))
    }

    pub fn with_evaluator(state: ResourceState, evaluator: SafetyEvaluator) -> Self {
        info!(
            processes = state.process_count(),
            resources = state.resource_count(),
            scan_order = %evaluator.order(),
            "Bank initialized"
        );
        Self {
            state,
            processor: RequestProcessor::new(evaluator),
            stats: BankStats::default(),
        }
    }

    /// Build from a scenario; the scenario's own scan order wins over the config
    pub fn from_scenario(scenario: &Scenario, config: &BankConfig) -> Result<Self> {
        let state = scenario.build_state()?;
        let order = scenario
            .scan_order
            .clone()
            .unwrap_or_else(|| config.scan_order.clone());
        Ok(Self::with_evaluator(state, SafetyEvaluator::new(order)))
    }

    pub fn state(&self) -> &ResourceState {
        &self.state
    }

    pub fn stats(&self) -> &BankStats {
        &self.stats
    }

    pub fn evaluator(&self) -> &SafetyEvaluator {
        self.processor.checker()
    }

    pub fn check_safe(&mut self) -> SafetyReport {
        self.stats.safety_checks += 1;
        self.processor.check_safe(&self.state)
    }

    pub fn request(
        &mut self,
        process: ProcessId,
        request: &[Units],
    ) -> RequestResult<RequestOutcome> {
        let result = self.processor.request(&mut self.state, process, request);
        self.stats.record_request(&result);
        if result.is_ok() {
            self.stats.safety_checks += 1;
        }
        result
    }

    pub fn release(&mut self, process: ProcessId, release: &[Units]) -> RequestResult<()> {
        let result = self.processor.release(&mut self.state, process, release);
        self.stats.record_release(&result);
        result
    }

    pub fn release_all(&mut self, process: ProcessId) -> RequestResult<ResourceVector> {
        let result = self.processor.release_all(&mut self.state, process);
        self.stats.record_release(&result);
        result
    }
}

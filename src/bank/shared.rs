/*!
 * Shared Bank
 * Mutual-exclusion boundary for hosts that issue requests from many threads
 */

use super::bank::Bank;
use super::stats::BankStats;
use crate::core::types::{ProcessId, ResourceVector, Units};
use crate::request::{RequestOutcome, RequestResult};
use crate::safety::SafetyReport;
use crate::state::ResourceState;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle serializing every call on one [`Bank`]
///
/// Each method holds the lock for exactly one operation, so a request's
/// tentative allocation is never visible to another caller. No fairness or
/// ordering between waiting callers is provided.
#[derive(Debug, Clone)]
pub struct SharedBank {
    inner: Arc<Mutex<Bank>>,
}

impl SharedBank {
    pub fn new(bank: Bank) -> Self {
        Self {
            inner: Arc::new(Mutex::new(bank)),
        }
    }

    pub fn check_safe(&self) -> SafetyReport {
        self.inner.lock().check_safe()
    }

    pub fn request(&self, process: ProcessId, request: &[Units]) -> RequestResult<RequestOutcome> {
        self.inner.lock().request(process, request)
    }

    pub fn release(&self, process: ProcessId, release: &[Units]) -> RequestResult<()> {
        self.inner.lock().release(process, release)
    }

    pub fn release_all(&self, process: ProcessId) -> RequestResult<ResourceVector> {
        self.inner.lock().release_all(process)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> ResourceState {
        self.inner.lock().state().clone()
    }

    pub fn stats(&self) -> BankStats {
        *self.inner.lock().stats()
    }

    /// Run several operations under one lock acquisition
    pub fn with_bank<R>(&self, f: impl FnOnce(&mut Bank) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}

impl From<Bank> for SharedBank {
    fn from(bank: Bank) -> Self {
        Self::new(bank)
    }
}

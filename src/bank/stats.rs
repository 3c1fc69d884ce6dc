/*!
 * Bank Statistics
 * Counters for safety checks and request outcomes
 */

use crate::request::{RequestError, RequestOutcome, RequestResult};
use serde::{Deserialize, Serialize};

/// Operation counters for one bank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankStats {
    pub safety_checks: u64,
    pub granted: u64,
    pub denied_unsafe: u64,
    pub exceeded_claim: u64,
    pub insufficient: u64,
    pub malformed: u64,
    pub releases: u64,
    pub rejected_releases: u64,
}

impl BankStats {
    /// Count the result of one request
    pub fn record_request(&mut self, result: &RequestResult<RequestOutcome>) {
        match result {
            Ok(RequestOutcome::Granted(_)) => self.granted += 1,
            Ok(RequestOutcome::Unsafe) => self.denied_unsafe += 1,
            Err(err) => self.record_error(err),
        }
    }

    /// Count the result of one release
    pub fn record_release<T>(&mut self, result: &RequestResult<T>) {
        match result {
            Ok(_) => self.releases += 1,
            Err(err) => self.record_error(err),
        }
    }

    fn record_error(&mut self, err: &RequestError) {
        let counter = match err {
            _ if err.is_malformed() => &mut self.malformed,
            RequestError::ExceedsClaim { .. } => &mut self.exceeded_claim,
            RequestError::InsufficientResources { .. } => &mut self.insufficient,
            _ => &mut self.rejected_releases,
        };
        *counter += 1;
    }

    /// Requests that did not result in an allocation
    pub fn rejected(&self) -> u64 {
        self.denied_unsafe + self.exceeded_claim + self.insufficient
    }
}

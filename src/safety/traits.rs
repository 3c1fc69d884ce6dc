/*!
 * Safety Traits
 * Interface between the request processor and the safety algorithm
 */

use super::types::SafetyReport;
use crate::state::ResourceState;

/// Decides whether a resource state admits a completion order
#[cfg_attr(test, mockall::automock)]
pub trait SafetyCheck {
    /// Evaluate `state` without mutating it
    fn check_safe(&self, state: &ResourceState) -> SafetyReport;
}

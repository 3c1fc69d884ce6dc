/*!
 * Safety Types
 * Result of a safety evaluation
 */

use crate::core::types::ProcessId;
use serde::{Deserialize, Serialize};

/// Outcome of one safety scan
///
/// `sequence` is present exactly when the state is safe. `blocked` lists the
/// processes that could not be shown to finish and is empty for safe states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    safe: bool,
    sequence: Option<Vec<ProcessId>>,
    blocked: Vec<ProcessId>,
}

impl SafetyReport {
    /// Safe state with its completion order
    pub fn safe(sequence: Vec<ProcessId>) -> Self {
        Self {
            safe: true,
            sequence: Some(sequence),
            blocked: Vec::new(),
        }
    }

    /// Unsafe state; `blocked` are the processes left unfinished
    pub fn unsafe_state(blocked: Vec<ProcessId>) -> Self {
        Self {
            safe: false,
            sequence: None,
            blocked,
        }
    }

    #[inline]
    pub fn is_safe(&self) -> bool {
        self.safe
    }

    pub fn sequence(&self) -> Option<&[ProcessId]> {
        self.sequence.as_deref()
    }

    pub fn blocked(&self) -> &[ProcessId] {
        &self.blocked
    }

    pub fn into_sequence(self) -> Option<Vec<ProcessId>> {
        self.sequence
    }
}

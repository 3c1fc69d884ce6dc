/*!
 * Request Types
 * Outcomes and rejections of resource requests
 */

use crate::core::types::{ProcessId, ResourceId, Units};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request operation result
pub type RequestResult<T> = Result<T, RequestError>;

/// Rejections raised before any state is touched
///
/// All of these leave the resource state exactly as it was.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum RequestError {
    #[error("Process {process} does not exist ({process_count} processes)")]
    #[diagnostic(
        code(request::unknown_process),
        help("Process indices run from 0 to the number of max-claim rows minus one.")
    )]
    UnknownProcess {
        process: ProcessId,
        process_count: usize,
    },

    #[error("Vector has {actual} entries, expected one per resource type ({expected})")]
    #[diagnostic(
        code(request::vector_length),
        help("Supply exactly one unit count per resource type.")
    )]
    VectorLength { expected: usize, actual: usize },

    #[error("Process {process} requested {requested} units of resource {resource}, exceeding its remaining claim of {need}")]
    #[diagnostic(
        code(request::exceeds_claim),
        help("A process may never ask for more than max - allocation.")
    )]
    ExceedsClaim {
        process: ProcessId,
        resource: ResourceId,
        requested: Units,
        need: Units,
    },

    #[error("Process {process} requested {requested} units of resource {resource}, only {available} available")]
    #[diagnostic(
        code(request::insufficient_resources),
        help("Retry after other processes release resources.")
    )]
    InsufficientResources {
        process: ProcessId,
        resource: ResourceId,
        requested: Units,
        available: Units,
    },

    #[error("Process {process} tried to release {requested} units of resource {resource}, but holds {allocated}")]
    #[diagnostic(
        code(request::exceeds_allocation),
        help("A process can only release units it currently holds.")
    )]
    ExceedsAllocation {
        process: ProcessId,
        resource: ResourceId,
        requested: Units,
        allocated: Units,
    },
}

impl RequestError {
    /// True for rejections caused by a badly shaped call rather than by state
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::UnknownProcess { .. } | Self::VectorLength { .. })
    }
}

/// Result of a well-formed request that passed both precondition checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "sequence", rename_all = "snake_case")]
pub enum RequestOutcome {
    /// Allocation committed; the state is safe with this completion order
    Granted(Vec<ProcessId>),
    /// Allocation would leave the state unsafe and was rolled back
    Unsafe,
}

impl RequestOutcome {
    #[inline]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    pub fn sequence(&self) -> Option<&[ProcessId]> {
        match self {
            Self::Granted(sequence) => Some(sequence),
            Self::Unsafe => None,
        }
    }
}

/*!
 * Resource State Types
 * Construction errors for the allocation snapshot
 */

use crate::core::types::{ProcessId, ResourceId, Units};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resource state operation result
pub type StateResult<T> = Result<T, StateError>;

/// Malformed input detected while building or verifying a resource state
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum StateError {
    #[error("Row {row} of {matrix} has {actual} columns, expected {expected}")]
    #[diagnostic(
        code(state::ragged_matrix),
        help("Every row must carry one entry per resource type (the length of `available`).")
    )]
    RaggedMatrix {
        matrix: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Allocation has {actual} process rows, max has {expected}")]
    #[diagnostic(
        code(state::row_count_mismatch),
        help("Max and allocation must describe the same set of processes.")
    )]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("Process {process} holds {allocated} units of resource {resource}, above its max claim of {max}")]
    #[diagnostic(
        code(state::allocation_exceeds_max),
        help("A process can never hold more than it declared. Fix the allocation or raise the claim.")
    )]
    AllocationExceedsMax {
        process: ProcessId,
        resource: ResourceId,
        allocated: Units,
        max: Units,
    },

    #[error("Total supply of resource {0} overflows the unit counter")]
    #[diagnostic(
        code(state::supply_overflow),
        help("Available plus all allocations of a resource must fit in 32 bits.")
    )]
    SupplyOverflow(ResourceId),

    #[error("Need of process {process} for resource {resource} is out of sync with max - allocation")]
    #[diagnostic(
        code(state::need_out_of_sync),
        help("Need is derived state. This indicates an internal accounting bug.")
    )]
    NeedOutOfSync {
        process: ProcessId,
        resource: ResourceId,
    },
}

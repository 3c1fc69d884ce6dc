/*!
 * Core Types
 * Common types used across the banker
 */

/// Process index (row of the claim matrices)
pub type ProcessId = usize;

/// Resource type index (column of the claim matrices)
pub type ResourceId = usize;

/// Unit count of a single resource type
pub type Units = u32;

/// One unit count per resource type
pub type ResourceVector = Vec<Units>;

/*!
 * State Module
 * Resource allocation snapshot and its invariants
 */

pub mod matrix;
pub mod resource_state;
pub mod types;

// Re-export public API
pub use matrix::Matrix;
pub use resource_state::ResourceState;
pub use types::{StateError, StateResult};

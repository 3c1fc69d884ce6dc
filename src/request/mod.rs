/*!
 * Request Module
 * Resource request evaluation with tentative allocation and rollback
 */

pub mod processor;
pub mod types;

// Re-export public API
pub use processor::RequestProcessor;
pub use types::{RequestError, RequestOutcome, RequestResult};

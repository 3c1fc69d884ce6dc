/*!
 * Scenario Module
 * Serde-loadable inputs and a request script for the driver
 */

use crate::core::errors::Result;
use crate::core::types::{ProcessId, ResourceVector, Units};
use crate::safety::ScanOrder;
use crate::state::{ResourceState, StateResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One request to replay against the scenario state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedRequest {
    pub process: ProcessId,
    pub request: ResourceVector,
}

/// Initial state plus an ordered request script
///
/// ```json
/// {
///   "available": [3, 3, 2],
///   "max": [[7, 5, 3], [3, 2, 2]],
///   "allocation": [[0, 1, 0], [2, 0, 0]],
///   "scan_order": "ascending",
///   "requests": [{ "process": 1, "request": [1, 0, 2] }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub available: Vec<Units>,
    pub max: Vec<Vec<Units>>,
    pub allocation: Vec<Vec<Units>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_order: Option<ScanOrder>,
    #[serde(default)]
    pub requests: Vec<ScriptedRequest>,
}

impl Scenario {
    /// Five processes, three resource types, two requests
    pub fn textbook() -> Self {
        Self {
            available: vec![3, 3, 2],
            max: vec![
                vec![7, 5, 3],
                vec![3, 2, 2],
                vec![9, 0, 2],
                vec![2, 2, 2],
                vec![4, 3, 3],
            ],
            allocation: vec![
                vec![0, 1, 0],
                vec![2, 0, 0],
                vec![3, 0, 2],
                vec![2, 1, 1],
                vec![0, 0, 2],
            ],
            scan_order: Some(ScanOrder::textbook()),
            requests: vec![
                ScriptedRequest {
                    process: 1,
                    request: vec![1, 0, 2],
                },
                ScriptedRequest {
                    process: 4,
                    request: vec![3, 3, 1],
                },
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading scenario");
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn build_state(&self) -> StateResult<ResourceState> {
        ResourceState::new(
            self.available.clone(),
            self.max.clone(),
            self.allocation.clone(),
        )
    }
}

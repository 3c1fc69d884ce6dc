/*!
 * Bank Configuration
 *
 * Runtime configuration for the safety scan and log output
 */

use crate::core::errors::{BankerError, Result};
use crate::safety::ScanOrder;
use serde::{Deserialize, Serialize};

/// Environment variable selecting the safety scan order
pub const SCAN_ORDER_ENV: &str = "BANKER_SCAN_ORDER";

/// Environment variable enabling JSON log output
pub const TRACE_JSON_ENV: &str = "BANKER_TRACE_JSON";

/// Banker configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BankConfig {
    /// Tie-break order for the safety scan
    #[serde(default)]
    pub scan_order: ScanOrder,
    /// Emit JSON-formatted logs instead of compact text
    #[serde(default)]
    pub trace_json: bool,
}

impl BankConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SCAN_ORDER_ENV) {
            self.scan_order = raw.parse::<ScanOrder>().map_err(BankerError::Configuration)?;
        }
        if let Some(raw) = lookup(TRACE_JSON_ENV) {
            self.trace_json = parse_flag(TRACE_JSON_ENV, &raw)?;
        }
        Ok(self)
    }

    pub fn with_scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(BankerError::Configuration(format!(
            "{} must be a boolean flag, got '{}'",
            key, other
        ))),
    }
}

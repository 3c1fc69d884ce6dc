/*!
 * Safety Scan Configuration
 * Process priority order used to break ties in the safety scan
 */

use crate::core::types::ProcessId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Order in which the safety scan considers processes
///
/// Among all processes able to finish at a given step, the scan always picks
/// the first one in this order, so the witness sequence is reproducible.
/// Whether a state is safe does not depend on the order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Lowest process index first
    #[default]
    Ascending,
    /// Highest process index first
    Descending,
    /// Listed processes first, in the given order, then the rest ascending
    Explicit(Vec<ProcessId>),
}

impl ScanOrder {
    /// Order that reproduces the classic textbook witness `[1, 3, 4, 0, 2]`
    pub fn textbook() -> Self {
        Self::Explicit(vec![1, 3, 4, 0, 2])
    }

    /// Expand into a full permutation of `0..process_count`
    ///
    /// Out-of-range and repeated entries of an explicit order are skipped.
    pub fn resolve(&self, process_count: usize) -> Vec<ProcessId> {
        match self {
            Self::Ascending => (0..process_count).collect(),
            Self::Descending => (0..process_count).rev().collect(),
            Self::Explicit(listed) => {
                let mut seen = vec![false; process_count];
                let mut order = Vec::with_capacity(process_count);
                for &process in listed {
                    if process < process_count && !seen[process] {
                        seen[process] = true;
                        order.push(process);
                    }
                }
                order.extend((0..process_count).filter(|&process| !seen[process]));
                order
            }
        }
    }
}

impl FromStr for ScanOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascending" | "asc" => Ok(Self::Ascending),
            "descending" | "desc" => Ok(Self::Descending),
            "textbook" => Ok(Self::textbook()),
            "" => Ok(Self::Explicit(Vec::new())),
            list => list
                .split(',')
                .map(|item| item.trim().parse::<ProcessId>())
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Explicit)
                .map_err(|_| {
                    format!(
                        "Invalid scan order '{}'. Valid: ascending, descending, textbook, or comma-separated process indices",
                        s
                    )
                }),
        }
    }
}

impl fmt::Display for ScanOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("ascending"),
            Self::Descending => f.write_str("descending"),
            Self::Explicit(listed) => {
                let items: Vec<String> = listed.iter().map(ToString::to_string).collect();
                f.write_str(&items.join(","))
            }
        }
    }
}

impl Serialize for ScanOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScanOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

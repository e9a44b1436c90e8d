/*!
 * Scheduler Types
 * Scheduling policy codes and selection results
 */

use crate::core::errors::SchedulerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// CPU scheduling policy
///
/// Both policies are non-preemptive: a selected process runs its current
/// operation to completion before the scheduler is consulted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulingPolicy {
    /// First-come-first-served
    #[default]
    FcfsN,
    /// Shortest-job-first on the precomputed total run time
    SjfN,
}

impl SchedulingPolicy {
    /// Parse from the configuration code (case-insensitive)
    pub fn from_code(s: &str) -> Result<Self, SchedulerError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS-N" => Ok(Self::FcfsN),
            "SJF-N" => Ok(Self::SjfN),
            _ => Err(SchedulerError::InvalidPolicy(s.to_string())),
        }
    }

    /// Convert to the configuration code
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FcfsN => "FCFS-N",
            Self::SjfN => "SJF-N",
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_code(&s).map_err(serde::de::Error::custom)
    }
}

/// Outcome of one scheduling decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Table index of the entry now RUNNING
    pub index: usize,
    /// Whether the selection is announced with the selected/RUNNING pair
    pub announce: bool,
}

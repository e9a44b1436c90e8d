/*!
 * Engine Types
 * Run summary produced by a completed simulation
 */

use crate::core::serde::{is_empty_vec, is_none};
use crate::core::types::{Millis, Pid};
use crate::memory::MemoryStats;
use crate::process::{ExitReason, ProcessEntry, ProcessState};
use crate::scheduler::SchedulingPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final state of one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    pub pid: Pid,
    pub time_remaining: Millis,
    pub state: ProcessState,
    #[serde(default, skip_serializing_if = "is_none")]
    pub exit_reason: Option<ExitReason>,
    pub operations_executed: usize,
}

impl From<&ProcessEntry> for ProcessSummary {
    fn from(entry: &ProcessEntry) -> Self {
        Self {
            pid: entry.pid(),
            time_remaining: entry.time_remaining(),
            state: entry.state(),
            exit_reason: entry.exit_reason(),
            operations_executed: entry.cursor(),
        }
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub policy: SchedulingPolicy,
    #[serde(default, skip_serializing_if = "is_empty_vec")]
    pub processes: Vec<ProcessSummary>,
    pub memory: MemoryStats,
    /// Simulated time at `Simulation end`, in microseconds
    pub elapsed_us: u64,
    pub lines_emitted: usize,
}

impl SimulationReport {
    pub fn completed(&self) -> usize {
        self.count(ExitReason::Completed)
    }

    pub fn faulted(&self) -> usize {
        self.count(ExitReason::SegmentationFault)
    }

    fn count(&self, reason: ExitReason) -> usize {
        self.processes
            .iter()
            .filter(|p| p.exit_reason == Some(reason))
            .count()
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run Summary ({})", self.policy)?;
        for p in &self.processes {
            let reason = match p.exit_reason {
                Some(ExitReason::Completed) => "completed",
                Some(ExitReason::SegmentationFault) => "segmentation fault",
                None => "-",
            };
            writeln!(
                f,
                "  Process {}: {} ms, {}, {}",
                p.pid, p.time_remaining, p.state, reason
            )?;
        }
        write!(
            f,
            "  Memory: {} of {} KB allocated, {} granted, {} rejected",
            self.memory.allocated_memory,
            self.memory.total_memory,
            self.memory.granted_requests,
            self.memory.rejected_requests
        )
    }
}

/*!
 * Process Table
 * Builds process control blocks from metadata and tracks completion
 */

use super::entry::ProcessEntry;
use super::types::ProcessResult;
use crate::config::SimConfig;
use crate::core::errors::ProcessError;
use crate::core::types::{Millis, Pid};
use crate::metadata::{Marker, Operation};
use log::debug;
use std::ops::Index;

/// Ordered process table; index order is pid order
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    entries: Vec<ProcessEntry>,
}

impl ProcessTable {
    /// Split the operation list into one entry per `app start` .. `app end`
    /// program, stopping at `sys end`. Pids are assigned from 0 in order.
    pub fn from_operations(operations: &[Operation], config: &SimConfig) -> ProcessResult<Self> {
        match operations.first() {
            Some(Operation::System {
                marker: Marker::Start,
            }) => {}
            _ => return Err(ProcessError::MissingSystemStart),
        }

        let mut entries = Vec::new();
        let mut index = 1;

        while let Some(op) = operations.get(index) {
            if op.is_system() || op.is_end() {
                break;
            }

            let pid = entries.len() as Pid;
            if !op.is_app_start() {
                return Err(ProcessError::MissingAppStart { index });
            }

            let end = operations[index..]
                .iter()
                .position(|op| op.is_end() || op.is_system())
                .map(|offset| index + offset)
                .filter(|&end| !operations[end].is_system())
                .ok_or(ProcessError::UnterminatedProgram {
                    pid,
                    start_index: index,
                })?;

            let program = operations[index..=end].to_vec();
            let time_remaining = total_run_time(&program, config);
            debug!(
                "Process {} built from operations {}..={} ({} ms)",
                pid, index, end, time_remaining
            );

            entries.push(ProcessEntry::new(pid, program, time_remaining));
            index = end + 1;
        }

        Ok(Self { entries })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProcessEntry> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ProcessEntry> {
        self.entries.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProcessEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ProcessEntry> {
        self.entries.iter_mut()
    }

    /// True iff every entry is EXIT (vacuously true for an empty table)
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(ProcessEntry::is_exited)
    }
}

impl Index<usize> for ProcessTable {
    type Output = ProcessEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

/// CPU cycles × CPU rate plus IO cycles × IO rate over a whole program
pub fn total_run_time(program: &[Operation], config: &SimConfig) -> Millis {
    program
        .iter()
        .map(|op| match op {
            Operation::Cpu { cycles } => cycles.saturating_mul(config.proc_cycle_rate),
            Operation::Io { cycles, .. } => cycles.saturating_mul(config.io_cycle_rate),
            _ => 0,
        })
        .fold(0, Millis::saturating_add)
}

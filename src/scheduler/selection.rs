/*!
 * Process Selection
 * FCFS-N and SJF-N selection over the process table
 */

use super::types::{SchedulingPolicy, Selection};
use crate::core::errors::{SchedulerError, SimResult};
use crate::process::{ProcessState, ProcessTable};
use log::debug;

/// Stateless CPU scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    policy: SchedulingPolicy,
}

impl Scheduler {
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    /// Pick the entry to run after `previous` and mark it RUNNING.
    ///
    /// `previous` is the table index of the entry that ran last, or 0
    /// before the first selection.
    pub fn select(&self, previous: usize, table: &mut ProcessTable) -> SimResult<Selection> {
        let selection = match self.policy {
            SchedulingPolicy::FcfsN => first_come_first_served(previous, table)?,
            SchedulingPolicy::SjfN => shortest_job_first(previous, table)?,
        };

        let entry = table
            .get_mut(selection.index)
            .ok_or(SchedulerError::NoRunnableProcess(selection.index as u32))?;
        entry.transition(ProcessState::Running)?;

        debug!(
            "{} selected process {} ({} ms, announce: {})",
            self.policy,
            entry.pid(),
            entry.time_remaining(),
            selection.announce
        );
        Ok(selection)
    }
}

/// Keep the current entry until it exits, then move to its successor
fn first_come_first_served(
    previous: usize,
    table: &ProcessTable,
) -> Result<Selection, SchedulerError> {
    let prev = table
        .get(previous)
        .ok_or(SchedulerError::NoRunnableProcess(previous as u32))?;

    let (index, new_process) = if prev.is_exited() {
        (previous + 1, true)
    } else {
        (previous, false)
    };

    let entry = table
        .get(index)
        .ok_or(SchedulerError::NoRunnableProcess(prev.pid()))?;

    Ok(Selection {
        index,
        announce: new_process || entry.not_started(),
    })
}

/// Smallest precomputed run time among entries that have not exited.
///
/// The scan is seeded with the previous entry while it is still runnable,
/// so a running process is never displaced by an equal one. Once it has
/// exited the seed is the last runnable entry and ties go to the earliest.
fn shortest_job_first(previous: usize, table: &ProcessTable) -> Result<Selection, SchedulerError> {
    let prev = table
        .get(previous)
        .ok_or(SchedulerError::NoRunnableProcess(previous as u32))?;
    let previous_exited = prev.is_exited();

    let mut shortest = if previous_exited {
        table
            .iter()
            .rposition(|entry| !entry.is_exited())
            .ok_or(SchedulerError::NoRunnableProcess(prev.pid()))?
    } else {
        previous
    };

    for (index, entry) in table.iter().enumerate() {
        if entry.is_exited() {
            continue;
        }
        let best = table[shortest].time_remaining();
        let earlier_tie = previous_exited && entry.time_remaining() == best && index < shortest;
        if entry.time_remaining() < best || earlier_tie {
            shortest = index;
        }
    }

    Ok(Selection {
        index: shortest,
        announce: table[shortest].not_started(),
    })
}

/*!
 * Process Entry
 * Per-process control block: lifecycle state, program cursor, run time
 */

use super::types::{ExitReason, ProcessResult, ProcessState};
use crate::core::errors::ProcessError;
use crate::core::types::{Millis, Pid};
use crate::metadata::Operation;

/// Process control block
#[derive(Debug, Clone)]
pub struct ProcessEntry {
    pid: Pid,
    state: ProcessState,
    time_remaining: Millis,
    // `app start` through `app end`, inclusive
    program: Vec<Operation>,
    cursor: usize,
    exit_reason: Option<ExitReason>,
}

impl ProcessEntry {
    pub fn new(pid: Pid, program: Vec<Operation>, time_remaining: Millis) -> Self {
        Self {
            pid,
            state: ProcessState::New,
            time_remaining,
            program,
            cursor: 0,
            exit_reason: None,
        }
    }

    #[inline]
    pub fn pid(&self) -> Pid {
        self.pid
    }

    #[inline]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Total simulated run time computed at admission. Static: never
    /// decremented while the process runs.
    #[inline]
    pub fn time_remaining(&self) -> Millis {
        self.time_remaining
    }

    #[inline]
    pub fn is_exited(&self) -> bool {
        self.state == ProcessState::Exit
    }

    pub fn exit_reason(&self) -> Option<ExitReason> {
        self.exit_reason
    }

    pub fn program(&self) -> &[Operation] {
        &self.program
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Operation under the cursor
    pub fn current_operation(&self) -> &Operation {
        &self.program[self.cursor]
    }

    /// Whether the cursor still sits on `app start`
    pub fn not_started(&self) -> bool {
        self.current_operation().is_app_start()
    }

    /// Move the cursor to the next operation and return it
    pub fn advance(&mut self) -> ProcessResult<&Operation> {
        if self.cursor + 1 >= self.program.len() {
            return Err(ProcessError::ProgramOverrun(self.pid));
        }
        self.cursor += 1;
        Ok(&self.program[self.cursor])
    }

    /// Apply a lifecycle transition
    pub fn transition(&mut self, to: ProcessState) -> ProcessResult<()> {
        if !self.state.can_transition_to(to) {
            return Err(ProcessError::InvalidStateTransition {
                pid: self.pid,
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    /// Move a running process to EXIT, recording why
    pub fn terminate(&mut self, reason: ExitReason) -> ProcessResult<()> {
        self.transition(ProcessState::Exit)?;
        self.exit_reason = Some(reason);
        Ok(())
    }
}

/*!
 * Simulation Engine
 * Drives the process table through the scheduler, dispatching each
 * process's operations and emitting timestamped status lines
 */

use super::types::{ProcessSummary, SimulationReport};
use crate::config::SimConfig;
use crate::core::errors::{SchedulerError, SimResult};
use crate::core::types::{Cycles, Millis, Pid};
use crate::memory::{AllocationOutcome, MemoryAllocator};
use crate::metadata::{MemoryAction, Operation};
use crate::monitoring::{span_operation, EventLog, SimEvent};
use crate::process::{ExitReason, ProcessState, ProcessTable};
use crate::scheduler::Scheduler;
use crate::timer::Clock;
use std::time::Duration;
use tracing::{debug, info, info_span};

/// One simulation run: owns the process table, allocator and clock
pub struct Simulation<C: Clock> {
    config: SimConfig,
    table: ProcessTable,
    memory: MemoryAllocator,
    scheduler: Scheduler,
    clock: C,
}

impl<C: Clock> Simulation<C> {
    /// Build the process table from `operations` and size memory from
    /// the configuration
    pub fn new(config: SimConfig, operations: &[Operation], clock: C) -> SimResult<Self> {
        config.validate()?;
        let table = ProcessTable::from_operations(operations, &config)?;
        let memory = MemoryAllocator::new(config.memory_available);
        let scheduler = Scheduler::new(config.policy);

        debug!(
            processes = table.len(),
            policy = %config.policy,
            memory = config.memory_available,
            "Simulation prepared"
        );

        Ok(Self {
            config,
            table,
            memory,
            scheduler,
            clock,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn table(&self) -> &ProcessTable {
        &self.table
    }

    pub fn memory(&self) -> &MemoryAllocator {
        &self.memory
    }

    /// Run every process to EXIT, recording status lines into `log`.
    ///
    /// The log is flushed to its file sink before returning.
    pub fn run(&mut self, log: &mut EventLog) -> SimResult<SimulationReport> {
        let span = info_span!("simulation", policy = %self.scheduler.policy());
        let _entered = span.enter();

        self.clock.reset();
        self.emit(log, SimEvent::SimulatorStart)?;

        for index in 0..self.table.len() {
            let pid = self.table[index].pid();
            if let Some(entry) = self.table.get_mut(index) {
                entry.transition(ProcessState::Ready)?;
            }
            self.emit(log, SimEvent::ProcessReady { pid })?;
        }

        let mut previous = 0;
        while !self.table.is_complete() {
            previous = self.step(previous, log)?;
        }

        self.emit(log, SimEvent::SystemStop)?;
        self.emit(log, SimEvent::SimulationEnd)?;
        let elapsed = self.clock.lap();
        log.flush()?;

        let report = SimulationReport {
            policy: self.config.policy,
            processes: self.table.iter().map(ProcessSummary::from).collect(),
            memory: self.memory.stats(),
            elapsed_us: elapsed.as_micros() as u64,
            lines_emitted: log.lines().len(),
        };
        info!(
            completed = report.completed(),
            faulted = report.faulted(),
            elapsed_us = report.elapsed_us,
            "Simulation finished"
        );
        Ok(report)
    }

    /// Select, execute one operation, and settle the selected entry's
    /// state. Returns the selected index.
    fn step(&mut self, previous: usize, log: &mut EventLog) -> SimResult<usize> {
        let selection = self.scheduler.select(previous, &mut self.table)?;
        let index = selection.index;
        let entry = self
            .table
            .get(index)
            .ok_or(SchedulerError::NoRunnableProcess(previous as Pid))?;
        let pid = entry.pid();

        if selection.announce {
            let time_remaining = entry.time_remaining();
            self.emit(
                log,
                SimEvent::ProcessSelected {
                    pid,
                    time_remaining,
                },
            )?;
            self.emit(log, SimEvent::ProcessRunning { pid })?;
        }

        let operation = match self.table.get_mut(index) {
            Some(entry) => entry.advance()?.clone(),
            None => return Err(SchedulerError::NoRunnableProcess(pid).into()),
        };

        let op_span = span_operation(pid, operation.command());
        {
            let _entered = op_span.enter();
            self.dispatch(pid, index, &operation, log)?;
        }

        let exited = self.table[index].is_exited();
        if operation.is_end() || exited {
            op_span.record_outcome(if exited { "faulted" } else { "ended" });
            self.emit(log, SimEvent::ProcessEnded { pid })?;
            if let Some(entry) = self.table.get_mut(index) {
                if !entry.is_exited() {
                    entry.terminate(ExitReason::Completed)?;
                }
            }
            self.emit(log, SimEvent::ProcessExit { pid })?;
        } else {
            op_span.record_outcome("ready");
            if let Some(entry) = self.table.get_mut(index) {
                entry.transition(ProcessState::Ready)?;
            }
        }

        Ok(index)
    }

    /// Execute one operation for the running entry at `index`
    fn dispatch(
        &mut self,
        pid: Pid,
        index: usize,
        operation: &Operation,
        log: &mut EventLog,
    ) -> SimResult<()> {
        match operation {
            Operation::Io {
                direction,
                device,
                cycles,
            } => {
                self.emit(
                    log,
                    SimEvent::IoStart {
                        pid,
                        device: device.clone(),
                        direction: *direction,
                    },
                )?;
                self.wait_cycles(*cycles, self.config.io_cycle_rate);
                self.emit(
                    log,
                    SimEvent::IoEnd {
                        pid,
                        device: device.clone(),
                        direction: *direction,
                    },
                )?;
            }
            Operation::Cpu { cycles } => {
                self.emit(log, SimEvent::CpuStart { pid })?;
                self.wait_cycles(*cycles, self.config.proc_cycle_rate);
                self.emit(log, SimEvent::CpuEnd { pid })?;
            }
            Operation::Memory { action, base, size } => {
                let action = *action;
                self.emit(log, SimEvent::MemoryAttempt { pid, action })?;

                let succeeded = match action {
                    MemoryAction::Allocate => match self.memory.allocate(pid, *base, *size) {
                        AllocationOutcome::Granted(_) => true,
                        AllocationOutcome::Rejected(rejection) => {
                            debug!(pid, %rejection, "Allocation rejected");
                            false
                        }
                    },
                    MemoryAction::Access => self.memory.access(*base, *size),
                };

                if succeeded {
                    self.emit(log, SimEvent::MemorySuccess { pid, action })?;
                } else {
                    self.emit(log, SimEvent::MemoryFailure { pid, action })?;
                    if let Some(entry) = self.table.get_mut(index) {
                        entry.terminate(ExitReason::SegmentationFault)?;
                    }
                    self.emit(log, SimEvent::SegmentationFault { pid })?;
                }
            }
            // `app end` carries no work of its own; settled by the caller
            Operation::Application { .. } | Operation::System { .. } => {}
        }
        Ok(())
    }

    fn wait_cycles(&mut self, cycles: Cycles, rate: Millis) {
        let millis = cycles.saturating_mul(rate);
        self.clock.wait(Duration::from_millis(millis));
    }

    fn emit(&mut self, log: &mut EventLog, event: SimEvent) -> SimResult<()> {
        let timestamp = self.clock.lap();
        log.record(timestamp, event)
    }
}

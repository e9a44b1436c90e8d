/*!
 * End-to-End Simulation Tests
 * Full runs from metadata to status lines
 */

use crate::common::{messages, metadata, quiet_log, run_virtual};
use pretty_assertions::assert_eq;
use sim_kernel::process::ExitReason;
use sim_kernel::{SchedulingPolicy, SimConfig, SimEvent};

#[test]
fn test_single_cpu_burst_trace() {
    let ops = metadata("sys start; app start, 0; cpu process, 3; app end; sys end.");
    let mut log = quiet_log();
    run_virtual(SimConfig::default(), &ops, &mut log);

    assert_eq!(
        log.render(),
        " 0.000000, OS: Simulator start\n\
         \x200.000000, OS: Process 0 set to READY state from NEW state\n\
         \x200.000000, OS: Process 0 selected with 30 ms remaining\n\
         \x200.000000, OS: Process 0 set from READY to RUNNING\n\
         \x200.000000, Process: 0, cpu process operation start\n\
         \x200.030000, Process: 0, cpu process operation end\n\
         \x200.030000, OS: Process 0 ended\n\
         \x200.030000, OS: Process 0 set to EXIT\n\
         \x200.030000, OS: System stop\n\
         \x200.030000, OS: Simulation end\n"
    );
}

#[test]
fn test_io_and_memory_trace() {
    let ops = metadata(
        "sys start; app start, 0; dev in, hard drive, 2; mem allocate, 100, 50; \
         mem access, 110, 30; dev out, monitor, 1; app end; sys end.",
    );
    let mut log = quiet_log();
    let report = run_virtual(SimConfig::default(), &ops, &mut log);

    let lines = messages(&log);
    assert_eq!(
        lines[4..12].to_vec(),
        vec![
            "Process: 0, hard drive input operation start",
            "Process: 0, hard drive input operation end",
            "Process: 0, attempting mem allocate request",
            "Process: 0, successful mem allocate request",
            "Process: 0, attempting mem access request",
            "Process: 0, successful mem access request",
            "Process: 0, monitor output operation start",
            "Process: 0, monitor output operation end",
        ]
    );
    assert_eq!(report.completed(), 1);
    assert_eq!(report.memory.allocated_memory, 50);
    // 2 x 20 ms + 1 x 20 ms of device time
    assert_eq!(report.elapsed_us, 60_000);
}

#[test]
fn test_allocation_failure_only_ends_faulting_process() {
    let ops = metadata(
        "sys start; \
         app start, 0; mem allocate, 11000, 2000; cpu process, 1; app end; \
         app start, 0; mem allocate, 0, 100; cpu process, 1; app end; \
         sys end.",
    );
    let mut log = quiet_log();
    let report = run_virtual(SimConfig::default().with_memory(12_000), &ops, &mut log);

    let lines = messages(&log);
    let fault = lines
        .iter()
        .position(|l| l == "Process: 0, failed mem allocate request")
        .unwrap();
    assert_eq!(
        lines[fault..fault + 4].to_vec(),
        vec![
            "Process: 0, failed mem allocate request",
            "Process: 0, experiences segmentation fault",
            "OS: Process 0 ended",
            "OS: Process 0 set to EXIT",
        ]
    );
    assert!(lines.contains(&"Process: 1, successful mem allocate request".to_string()));
    assert!(!lines.contains(&"Process: 0, cpu process operation start".to_string()));

    assert_eq!(report.processes[0].exit_reason, Some(ExitReason::SegmentationFault));
    assert_eq!(report.processes[1].exit_reason, Some(ExitReason::Completed));
    assert_eq!(report.memory.rejected_requests, 1);
}

#[test]
fn test_processes_share_one_address_space() {
    let ops = metadata(
        "sys start; \
         app start, 0; mem allocate, 100, 50; app end; \
         app start, 0; mem allocate, 120, 10; app end; \
         app start, 0; mem access, 110, 20; app end; \
         sys end.",
    );
    let mut log = quiet_log();
    let report = run_virtual(SimConfig::default(), &ops, &mut log);

    assert_eq!(report.faulted(), 1);
    assert_eq!(report.processes[1].exit_reason, Some(ExitReason::SegmentationFault));
    // Blocks outlive the process that allocated them
    assert_eq!(report.processes[2].exit_reason, Some(ExitReason::Completed));
}

#[test]
fn test_same_input_same_trace() {
    let ops = metadata(
        "sys start; \
         app start, 0; cpu process, 4; dev in, keyboard, 2; app end; \
         app start, 0; mem allocate, 0, 10; mem access, 5, 10; app end; \
         app start, 0; cpu process, 1; app end; \
         sys end.",
    );
    for policy in [SchedulingPolicy::FcfsN, SchedulingPolicy::SjfN] {
        let config = SimConfig::default().with_policy(policy);

        let mut first = quiet_log();
        let mut second = quiet_log();
        let a = run_virtual(config.clone(), &ops, &mut first);
        let b = run_virtual(config, &ops, &mut second);

        assert_eq!(messages(&first), messages(&second));
        assert_eq!(first.render(), second.render());
        assert_eq!(a, b);
    }
}

#[test]
fn test_timestamps_never_decrease() {
    let ops = metadata(
        "sys start; \
         app start, 0; cpu process, 2; dev out, printer, 3; app end; \
         app start, 0; cpu process, 1; app end; \
         sys end.",
    );
    let mut log = quiet_log();
    run_virtual(SimConfig::default(), &ops, &mut log);

    let stamps: Vec<_> = log.lines().iter().map(|l| l.timestamp).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    assert!(matches!(log.lines()[0].event, SimEvent::SimulatorStart));
}

#[test]
fn test_report_serializes() {
    let ops = metadata("sys start; app start, 0; mem access, 5, 5; app end; sys end.");
    let mut log = quiet_log();
    let report = run_virtual(SimConfig::default(), &ops, &mut log);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["policy"], "FCFS-N");
    assert_eq!(json["processes"][0]["exit_reason"], "segmentation_fault");
    assert_eq!(json["processes"][0]["state"], "exit");
}

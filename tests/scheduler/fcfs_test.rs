/*!
 * FCFS-N Tests
 * Selection order and announcements under first-come-first-served
 */

use pretty_assertions::assert_eq;
use sim_kernel::metadata::parse_metadata;
use sim_kernel::monitoring::{EventLog, SimEvent};
use sim_kernel::{LogTo, SchedulingPolicy, SimConfig, Simulation, VirtualClock};

fn run(body: &str) -> EventLog {
    let source = format!(
        "Start Program Meta-Data Code:\n{}\nEnd Program Meta-Data Code.",
        body
    );
    let operations = parse_metadata(&source).unwrap();
    let config = SimConfig::default().with_policy(SchedulingPolicy::FcfsN);
    let mut log = EventLog::new(LogTo::Monitor, "unused.lgf").with_console(std::io::sink());

    Simulation::new(config, &operations, VirtualClock::new())
        .unwrap()
        .run(&mut log)
        .unwrap();
    log
}

fn selected_pids(log: &EventLog) -> Vec<u32> {
    log.events()
        .filter_map(|event| match event {
            SimEvent::ProcessSelected { pid, .. } => Some(*pid),
            _ => None,
        })
        .collect()
}

#[test]
fn test_runs_in_table_order() {
    let log = run(
        "sys start; \
         app start, 0; cpu process, 9; app end; \
         app start, 0; cpu process, 1; app end; \
         app start, 0; cpu process, 4; app end; \
         sys end.",
    );
    assert_eq!(selected_pids(&log), vec![0, 1, 2]);
}

#[test]
fn test_each_process_announced_once() {
    let log = run(
        "sys start; \
         app start, 0; cpu process, 2; dev in, keyboard, 3; cpu process, 1; app end; \
         app start, 0; dev out, monitor, 1; app end; \
         sys end.",
    );

    let running: Vec<_> = log
        .events()
        .filter(|event| matches!(event, SimEvent::ProcessRunning { .. }))
        .collect();
    assert_eq!(running.len(), 2);
    assert_eq!(selected_pids(&log), vec![0, 1]);
}

#[test]
fn test_process_runs_to_exit_before_successor() {
    let log = run(
        "sys start; \
         app start, 0; cpu process, 1; cpu process, 1; app end; \
         app start, 0; cpu process, 1; app end; \
         sys end.",
    );

    let order: Vec<_> = log
        .events()
        .filter(|event| matches!(event, SimEvent::CpuStart { .. } | SimEvent::ProcessExit { .. }))
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        order,
        vec![
            "Process: 0, cpu process operation start",
            "Process: 0, cpu process operation start",
            "OS: Process 0 set to EXIT",
            "Process: 1, cpu process operation start",
            "OS: Process 1 set to EXIT",
        ]
    );
}

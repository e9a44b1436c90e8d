/*!
 * SJF-N Tests
 * Shortest-job-first selection on precomputed run time
 */

use pretty_assertions::assert_eq;
use sim_kernel::metadata::parse_metadata;
use sim_kernel::monitoring::{EventLog, SimEvent};
use sim_kernel::{LogTo, SchedulingPolicy, SimConfig, Simulation, VirtualClock};

/// One process per burst, processor rate 10 ms per cycle
fn run_bursts(cycles: &[u64]) -> EventLog {
    let programs: String = cycles
        .iter()
        .map(|c| format!("app start, 0; cpu process, {}; app end; ", c))
        .collect();
    let source = format!(
        "Start Program Meta-Data Code:\nsys start; {}sys end.\nEnd Program Meta-Data Code.",
        programs
    );
    let operations = parse_metadata(&source).unwrap();
    let config = SimConfig::default()
        .with_policy(SchedulingPolicy::SjfN)
        .with_cycle_rates(10, 20);
    let mut log = EventLog::new(LogTo::Monitor, "unused.lgf").with_console(std::io::sink());

    Simulation::new(config, &operations, VirtualClock::new())
        .unwrap()
        .run(&mut log)
        .unwrap();
    log
}

fn selections(log: &EventLog) -> Vec<(u32, u64)> {
    log.events()
        .filter_map(|event| match event {
            SimEvent::ProcessSelected {
                pid,
                time_remaining,
            } => Some((*pid, *time_remaining)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_shortest_selected_first() {
    let log = run_bursts(&[5, 1, 3]);
    assert_eq!(selections(&log), vec![(1, 10), (2, 30), (0, 50)]);
}

#[test]
fn test_ties_go_to_earlier_process() {
    let log = run_bursts(&[2, 4, 2, 4]);
    let pids: Vec<_> = selections(&log).into_iter().map(|(pid, _)| pid).collect();
    assert_eq!(pids, vec![0, 2, 1, 3]);
}

#[test]
fn test_every_process_exits_once() {
    let log = run_bursts(&[7, 3, 7, 1, 5]);
    let mut exits: Vec<_> = log
        .events()
        .filter_map(|event| match event {
            SimEvent::ProcessExit { pid } => Some(*pid),
            _ => None,
        })
        .collect();
    exits.sort_unstable();
    assert_eq!(exits, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_run_time_includes_io() {
    let source = "Start Program Meta-Data Code:\n\
                  sys start; \
                  app start, 0; dev in, hard drive, 2; app end; \
                  app start, 0; cpu process, 3; app end; \
                  sys end.\n\
                  End Program Meta-Data Code.";
    let operations = parse_metadata(source).unwrap();
    let config = SimConfig::default()
        .with_policy(SchedulingPolicy::SjfN)
        .with_cycle_rates(10, 20);
    let mut log = EventLog::new(LogTo::Monitor, "unused.lgf").with_console(std::io::sink());
    Simulation::new(config, &operations, VirtualClock::new())
        .unwrap()
        .run(&mut log)
        .unwrap();

    // 2 io cycles at 20 ms outweigh 3 cpu cycles at 10 ms
    assert_eq!(selections(&log), vec![(1, 30), (0, 40)]);
}

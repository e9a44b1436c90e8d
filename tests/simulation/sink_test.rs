/*!
 * Sink Tests
 * Console and log file routing of status lines
 */

use crate::common::{metadata, SharedBuffer};
use pretty_assertions::assert_eq;
use sim_kernel::{EventLog, LogTo, SimConfig, Simulation, VirtualClock};
use std::fs;

const PROGRAM: &str = "sys start; \
    app start, 0; cpu process, 2; mem allocate, 0, 64; app end; \
    app start, 0; dev in, keyboard, 1; mem access, 500, 1; app end; \
    sys end.";

fn run_to(log_to: LogTo, dir: &tempfile::TempDir) -> (EventLog, SharedBuffer, std::path::PathBuf) {
    let path = dir.path().join("simulation.lgf");
    let config = SimConfig::default().with_log_to(log_to, &path);
    let console = SharedBuffer::default();
    let mut log = EventLog::from_config(&config).with_console(console.clone());

    Simulation::new(config, &metadata(PROGRAM), VirtualClock::new())
        .unwrap()
        .run(&mut log)
        .unwrap();
    (log, console, path)
}

#[test]
fn test_both_sinks_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let (log, console, path) = run_to(LogTo::Both, &dir);

    let file = fs::read_to_string(&path).unwrap();
    assert_eq!(file, console.contents());
    assert_eq!(file, log.render());
    assert_eq!(file.lines().count(), log.lines().len());
}

#[test]
fn test_file_only_keeps_console_quiet() {
    let dir = tempfile::tempdir().unwrap();
    let (log, console, path) = run_to(LogTo::File, &dir);

    assert!(console.contents().is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), log.render());
}

#[test]
fn test_monitor_only_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let (log, console, path) = run_to(LogTo::Monitor, &dir);

    assert!(!path.exists());
    assert_eq!(console.contents(), log.render());
}

#[test]
fn test_unwritable_log_file_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("simulation.lgf");
    let config = SimConfig::default().with_log_to(LogTo::File, &path);
    let mut log = EventLog::from_config(&config).with_console(std::io::sink());

    let result = Simulation::new(config, &metadata(PROGRAM), VirtualClock::new())
        .unwrap()
        .run(&mut log);
    assert!(matches!(result, Err(sim_kernel::SimError::Io(_))));
}

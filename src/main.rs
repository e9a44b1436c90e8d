/*!
 * Simulator - Main Entry Point
 *
 * Loads a configuration and its metadata program, then:
 * - displays the configuration
 * - displays the metadata
 * - runs the simulation
 */

use clap::{ArgGroup, Parser};
use miette::{IntoDiagnostic, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use sim_kernel::{
    display_metadata, init_tracing, load_config, load_metadata, Clock, EventLog, LogTo,
    Operation, SimConfig, SimError, Simulation, SimulationReport, VirtualClock, WallClock,
};

#[derive(Debug, Parser)]
#[command(
    name = "simulator",
    version,
    about = "Operating system process scheduling and memory simulator"
)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .multiple(true)
        .args(["display_config", "display_metadata", "run_sim"])
))]
struct Opts {
    /// Simulator configuration file (text format, or JSON with a `.json` extension)
    config: PathBuf,

    /// Display the loaded configuration.
    #[clap(long, visible_alias = "dc", action = clap::ArgAction::SetTrue)]
    display_config: bool,

    /// Display the loaded metadata operations.
    #[clap(long, visible_alias = "dm", action = clap::ArgAction::SetTrue)]
    display_metadata: bool,

    /// Run the simulation.
    #[clap(long, visible_alias = "rs", action = clap::ArgAction::SetTrue)]
    run_sim: bool,

    /// Advance a virtual clock instead of sleeping for operation delays.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    virtual_clock: bool,

    /// Write a JSON run summary to this path after the simulation.
    #[clap(long, requires = "run_sim")]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let opts = Opts::parse();

    info!(config = %opts.config.display(), "Simulator starting");
    let config = load_config(&opts.config)?;

    println!("Simulator Program");
    println!("=================\n");

    if opts.display_config {
        println!("{}", config);
    }

    if !opts.display_metadata && !opts.run_sim {
        return Ok(());
    }

    let operations = load_metadata(&config.metadata_path)?;

    if opts.display_metadata {
        println!("{}", display_metadata(&operations));
    }

    if opts.run_sim {
        let report = if opts.virtual_clock {
            run_simulation(config, &operations, VirtualClock::new())?
        } else {
            run_simulation(config, &operations, WallClock::new())?
        };

        if let Some(path) = &opts.report {
            write_report(path, &report)?;
        }
    }

    println!("\nSimulator Program End.");
    Ok(())
}

fn run_simulation<C: Clock>(
    config: SimConfig,
    operations: &[Operation],
    clock: C,
) -> Result<SimulationReport> {
    println!("Simulator Run");
    println!("-------------\n");

    let mut log = EventLog::from_config(&config);
    if log.log_to() == LogTo::File {
        println!(
            "Logging output to file: {}",
            config.log_file_path.display()
        );
    }

    let mut simulation = Simulation::new(config, operations, clock)?;
    let report = simulation.run(&mut log)?;
    println!("\n{}", report);
    Ok(report)
}

fn write_report(path: &Path, report: &SimulationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(SimError::from)?;
    std::fs::write(path, json).into_diagnostic()?;
    info!(path = %path.display(), "Run report written");
    Ok(())
}

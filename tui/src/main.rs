//! Chroma Life Entry Point
//!
//! Runs a randomly seeded, colour-inheriting Game of Life in the terminal
//! until Esc, `q`, or Ctrl-C is pressed.
//!
//! Configuration comes from `$CHROMA_LIFE_CONFIG`, the platform config
//! directory (`chroma-life/config.toml`), and `CHROMA_LIFE_*` variables.
//! `RUST_LOG` filters log output.

use std::io::{self, IsTerminal};
use std::panic;

use anyhow::Context;
use chroma_life_core::{load_config, Simulation, SimulationConfig};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use chroma_life_tui::{logging, terminal, KeyboardControl, TerminalSink};

fn main() -> anyhow::Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    let log_gate = logging::init(&config)?;

    tracing::info!(
        source = %config.source,
        width = config.width,
        height = config.height,
        interval_ms = u64::try_from(config.interval.as_millis()).unwrap_or(u64::MAX),
        "Configuration loaded"
    );

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: chroma-life requires a terminal (TTY)");
        eprintln!();
        eprintln!("Run it interactively, or over SSH with the -t flag.");
        std::process::exit(1);
    }

    // Seed before touching the terminal so config errors print normally.
    let mut simulation = Simulation::new(&config)?;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::restore();
        original_hook(panic_info);
    }));

    log_gate.mute();
    let outcome = terminal::guarded(
        || run_in_terminal(&mut simulation, &config),
        terminal::restore,
    );
    log_gate.unmute();

    outcome?;
    println!(
        "Stopped after {} generations ({} cells alive)",
        simulation.generation(),
        simulation.grid().population()
    );
    Ok(())
}

fn run_in_terminal(simulation: &mut Simulation, config: &SimulationConfig) -> anyhow::Result<()> {
    terminal::enter()?;
    let mut screen = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    screen.clear()?;

    let mut sink = TerminalSink::new(screen, config.width, config.height);
    simulation.run(&mut sink, &mut KeyboardControl::new())?;
    Ok(())
}

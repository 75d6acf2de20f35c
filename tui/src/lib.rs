//! Chroma Life TUI - Terminal front end for the simulation
//!
//! Binds the headless engine in `chroma-life-core` to a real terminal.
//!
//! # Architecture
//!
//! - **Sink**: [`TerminalSink`] draws frames through a ratatui back buffer
//! - **Control**: [`KeyboardControl`] paces generations and watches for quit keys
//! - **Theme**: Cell colour tags to terminal colours
//! - **Terminal**: Raw mode and alternate screen, restored on every exit path
//! - **Logging**: File or stderr output, stderr muted while the grid is shown

pub mod control;
pub mod logging;
pub mod sink;
pub mod terminal;
pub mod theme;

pub use control::{is_quit_key, KeyboardControl};
pub use sink::TerminalSink;

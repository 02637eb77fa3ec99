//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `run.rs` — scenario run/list commands.
//! - `probe.rs` — ad-hoc query/check commands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate probe logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod probe;
pub mod run;

pub use probe::handle_probe_commands;
pub use run::handle_run_commands;

//! Service layer containing probe logic and side-effect helpers.
//!
//! ## Service map
//! - `api.rs` — blocking HTTP client for the search and detail endpoints.
//! - `verifier.rs` — query rewrite detection + literal-containment check.
//! - `scenarios.rs` — built-in scenario table and expectation evaluation.
//! - `runner.rs` — sequential scenario execution with per-scenario isolation.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects (network I/O) should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod api;
pub mod output;
pub mod runner;
pub mod scenarios;
pub mod verifier;

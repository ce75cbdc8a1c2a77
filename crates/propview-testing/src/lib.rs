//! Testing infrastructure for propview integration tests.
//!
//! - `fixtures`: sample listing records stored under `samples/`
//! - `probes`: scripted image probes standing in for the network
//! - `assertions`: checks over the CLI's JSON output
//! - `world`: isolated environment for running the `propview` binary

pub mod assertions;
pub mod fixtures;
pub mod probes;
pub mod world;

pub use fixtures::SampleRecords;
pub use probes::ScriptedProbe;
pub use world::{CliResult, TestWorld};

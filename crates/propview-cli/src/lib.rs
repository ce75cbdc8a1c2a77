// NOTE: CLI layering
//
// - args/types: clap surface only, no behavior
// - commands: resolves config once and dispatches to a handler
// - handlers: call the library crates and build a view model
// - presentation: view models are plain serde data; JSON output serializes
//   them as-is, plain output goes through the Display views

mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;

use types::LogLevel;

/// `RUST_LOG` wins when set; otherwise `--log-level` applies.
pub fn init_logging(level: LogLevel) {
    let env = env_logger::Env::default().default_filter_or(level.to_string());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

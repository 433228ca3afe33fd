mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, CollectArgs, Commands};
pub use commands::{Reported, run};

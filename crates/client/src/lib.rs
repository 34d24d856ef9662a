//! Terminal client for the hero arena.
//!
//! The `arena` binary is the composition root: it loads content, builds an
//! [`arena_runtime::Arena`] from environment settings and runs one command.
//! The modules here keep that logic testable without a terminal.
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod playback;
pub mod presentation;

pub use cli::{Cli, Command};
pub use config::CliConfig;

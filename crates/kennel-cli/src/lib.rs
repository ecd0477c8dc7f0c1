//! Kennel CLI
//!
//! Argument parsing, logging setup and subcommand execution for the `kennel`
//! binary. Split from `main.rs` so the pieces can be tested.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cli;
pub mod logging;
pub mod walkthrough;

pub use cli::{build_cli, parse_from, Invocation, Options};
pub use walkthrough::{execute, load_config};

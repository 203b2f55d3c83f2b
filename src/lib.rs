//! cyber-terminal - A simulated portfolio shell
//!
//! This library provides a fake terminal session: a fixed set of commands,
//! a read-only virtual directory tree, command history with autocomplete,
//! and timed "simulation" output played back on a virtual clock.

pub mod commands;
pub mod config;
pub mod content;
pub mod errors;
pub mod fs;
pub mod history;
pub mod output;
pub mod playback;
pub mod portfolio;
pub mod session;

pub use config::{ConfigError, Overrides, ShellOptions};
pub use errors::ShellError;
pub use output::{Line, OutputEvent, OutputSink, Style, Transcript};
pub use session::{split_script, Key, Session};

// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod exit_cmd;
pub mod hack_cmd;
pub mod help_cmd;
pub mod ls;
pub mod matrix_cmd;
pub mod nmap_cmd;
pub mod ping_cmd;
pub mod profile_cmds;
pub mod pwd;
pub mod registry;
pub mod ssh_cmd;
pub mod sudo;
pub mod types;
pub mod whoami_cmd;

pub use registry::{create_default_registry, register_builtins, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};

//! cd - Change directory
//!
//! Supports:
//! - cd (no argument) or cd ~ - go home
//! - cd .. - go up, stopping at the home depth
//! - cd /abs/path - any known directory
//! - cd name - a directory child of the current directory

use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::errors::ShellError;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }
    fn description(&self) -> &'static str {
        "Change directory"
    }
    fn usage(&self) -> &'static str {
        "cd <directory>"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let target = ctx.arg_or("");
        match ctx.fs.change_directory(&ctx.cwd, target) {
            Ok(dir) => CommandResult::empty().with_cwd(dir),
            Err(err) => CommandResult::error(ShellError::from_fs("cd", err)),
        }
    }
}

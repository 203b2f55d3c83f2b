// src/commands/pwd/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::OutputEvent;

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }
    fn description(&self) -> &'static str {
        "Print working directory"
    }
    fn usage(&self) -> &'static str {
        "pwd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        CommandResult::event(OutputEvent::info(ctx.cwd))
    }
}

use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::OutputEvent;

pub struct WhoamiCommand;

#[async_trait]
impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }
    fn description(&self) -> &'static str {
        "Display current user"
    }
    fn usage(&self) -> &'static str {
        "whoami"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        CommandResult::event(OutputEvent::success(ctx.options.username.clone()))
    }
}

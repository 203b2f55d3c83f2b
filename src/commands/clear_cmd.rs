use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::OutputEvent;

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }
    fn description(&self) -> &'static str {
        "Clear terminal screen"
    }
    fn usage(&self) -> &'static str {
        "clear"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::event(OutputEvent::Clear)
    }
}

use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::OutputEvent;
use crate::playback::{ms, PlaybackSequence};

pub struct ExitCommand;

#[async_trait]
impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }
    fn description(&self) -> &'static str {
        "Exit terminal"
    }
    fn usage(&self) -> &'static str {
        "exit"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        // The session keeps accepting input afterwards.
        let seq = PlaybackSequence::new("exit")
            .after(ms(1000), OutputEvent::info("Connection closed."));
        CommandResult::event(OutputEvent::success("Goodbye! Thanks for visiting my portfolio! 👋"))
            .with_playback(seq)
    }
}

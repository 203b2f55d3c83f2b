use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::OutputEvent;
use crate::playback::{ms, PlaybackSequence};
use crate::portfolio::{self, MATRIX_BANNER};

pub struct MatrixCommand;

#[async_trait]
impl Command for MatrixCommand {
    fn name(&self) -> &'static str {
        "matrix"
    }
    fn description(&self) -> &'static str {
        "Enter the matrix"
    }
    fn usage(&self) -> &'static str {
        "matrix"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        let seq = PlaybackSequence::new("matrix")
            .after(ms(2000), OutputEvent::success(portfolio::block(MATRIX_BANNER)));
        CommandResult::event(OutputEvent::success("Entering the Matrix...")).with_playback(seq)
    }
}

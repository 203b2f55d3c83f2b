use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::OutputEvent;
use crate::playback::{ms, PlaybackSequence};
use crate::portfolio::{self, SSH_DENIED, SSH_HOST_KEY};

pub struct SshCommand;

#[async_trait]
impl Command for SshCommand {
    fn name(&self) -> &'static str {
        "ssh"
    }
    fn description(&self) -> &'static str {
        "SSH connection (simulated)"
    }
    fn usage(&self) -> &'static str {
        "ssh [user@host]"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let target = ctx.arg_or("raman@notavailable.com");
        // The remote side never varies, whatever the target.
        let seq = PlaybackSequence::new("ssh")
            .after(ms(1000), OutputEvent::warning(portfolio::block(SSH_HOST_KEY)))
            .after(ms(1500), OutputEvent::error(portfolio::block(SSH_DENIED)));
        CommandResult::event(OutputEvent::info(format!("ssh {}", target))).with_playback(seq)
    }
}

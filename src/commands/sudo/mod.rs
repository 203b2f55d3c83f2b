// src/commands/sudo/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::OutputEvent;
use crate::playback::{ms, PlaybackSequence};

mod destruction;

pub use destruction::{destruction_sequence, is_destructive, DESTRUCTION_LINES};

pub struct SudoCommand;

pub(crate) fn password_prompt(username: &str) -> OutputEvent {
    OutputEvent::warning(format!("[sudo] password for {}: ", username))
}

#[async_trait]
impl Command for SudoCommand {
    fn name(&self) -> &'static str {
        "sudo"
    }
    fn description(&self) -> &'static str {
        "Execute as superuser"
    }
    fn usage(&self) -> &'static str {
        "sudo [command]"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.is_empty() {
            return CommandResult::event(OutputEvent::info("usage: sudo <command>"));
        }

        let command = ctx.args.join(" ");
        let username = &ctx.options.username;

        if is_destructive(&command) {
            log::debug!("sudo: playing destruction theater for '{}'", command);
            return CommandResult::event(password_prompt(username))
                .with_playback(destruction_sequence());
        }

        // Nothing is actually run.
        let seq = PlaybackSequence::new("sudo")
            .after(ms(1000), OutputEvent::success(format!("Executing: {}", command)))
            .with(OutputEvent::info("Command executed with root privileges."));
        CommandResult::event(password_prompt(username)).with_playback(seq)
    }
}

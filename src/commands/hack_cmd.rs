use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::OutputEvent;
use crate::playback::{ms, PlaybackSequence};
use crate::portfolio::{self, HACK_DISCLAIMER};

pub struct HackCommand;

const HACK_STEPS: &[&str] = &[
    "Scanning for open ports...",
    "Exploiting buffer overflow vulnerability...",
    "Bypassing firewall...",
    "Cracking password hash...",
    "Gaining root access...",
    "Installing backdoor...",
    "Covering tracks...",
    "Hack complete! 🎉",
];

#[async_trait]
impl Command for HackCommand {
    fn name(&self) -> &'static str {
        "hack"
    }
    fn description(&self) -> &'static str {
        "Initiate hacking sequence (for fun)"
    }
    fn usage(&self) -> &'static str {
        "hack [target]"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let target = ctx.arg_or("mainframe.example.com");
        let total = HACK_STEPS.len();
        let seq = PlaybackSequence::new("hack")
            .every(ms(1000), total, |i| {
                vec![OutputEvent::success(format!("[{}/{}] {}", i + 1, total, HACK_STEPS[i]))]
            })
            .after(ms(1000), OutputEvent::info(portfolio::block(HACK_DISCLAIMER)));

        CommandResult::event(OutputEvent::warning(format!(
            "🔴 Initiating hack sequence on {}...",
            target
        )))
        .with_playback(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_util::{lines, make_ctx};
    use crate::output::Style;

    #[tokio::test]
    async fn test_hack_sequence() {
        let result = HackCommand.execute(make_ctx(vec![])).await;
        assert_eq!(
            lines(&result.output),
            vec![("🔴 Initiating hack sequence on mainframe.example.com...".to_string(), Style::Warning)]
        );

        let seq = result.playback.unwrap();
        assert_eq!(seq.len(), 9);
        assert_eq!(seq.steps()[0].offset, ms(1000));
        assert_eq!(seq.steps()[7].offset, ms(8000));
        assert_eq!(seq.steps()[8].offset, ms(9000));
        assert_eq!(seq.steps()[0].event, OutputEvent::success("[1/8] Scanning for open ports..."));
        assert_eq!(seq.steps()[7].event, OutputEvent::success("[8/8] Hack complete! 🎉"));
    }
}

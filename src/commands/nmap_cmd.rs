use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::OutputEvent;
use crate::playback::{ms, PlaybackSequence};

pub struct NmapCommand;

fn scan_report(target: &str) -> String {
    format!(
        "\nNmap scan report for {}\n\
         Host is up (0.0012s latency).\n\
         \n\
         PORT     STATE SERVICE\n\
         22/tcp   open  ssh\n\
         80/tcp   open  http\n\
         443/tcp  open  https\n\
         3306/tcp open  mysql\n\
         5432/tcp open  postgresql\n\
         \n\
         Nmap done: 1 IP address (1 host up) scanned in 2.34 seconds",
        target
    )
}

#[async_trait]
impl Command for NmapCommand {
    fn name(&self) -> &'static str {
        "nmap"
    }
    fn description(&self) -> &'static str {
        "Network exploration tool (simulated)"
    }
    fn usage(&self) -> &'static str {
        "nmap [target]"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let target = ctx.arg_or("localhost");
        let seq = PlaybackSequence::new("nmap")
            .after(ms(2000), OutputEvent::success(scan_report(target)));
        CommandResult::event(OutputEvent::info(format!("Starting Nmap scan on {}...", target)))
            .with_playback(seq)
    }
}

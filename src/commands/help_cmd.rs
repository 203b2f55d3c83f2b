use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::errors::ShellError;
use crate::output::OutputEvent;

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }
    fn description(&self) -> &'static str {
        "Display available commands"
    }
    fn usage(&self) -> &'static str {
        "help [command]"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if let Some(arg) = ctx.args.first() {
            let name = arg.to_lowercase();
            return match ctx.registry.get(&name) {
                Some(cmd) => CommandResult::events(vec![
                    OutputEvent::plain(format!("{} - {}", cmd.name(), cmd.description())),
                    OutputEvent::info(format!("Usage: {}", cmd.usage())),
                ]),
                None => CommandResult::error(ShellError::NoHelp(name)),
            };
        }

        let mut output = vec![
            OutputEvent::info("Available commands:"),
            OutputEvent::plain(""),
        ];
        for cmd in ctx.registry.list() {
            output.push(OutputEvent::plain(format!("  {} - {}", cmd.name(), cmd.description())));
        }
        output.push(OutputEvent::plain(""));
        output.push(OutputEvent::info(
            "Type \"help [command]\" for more information about a specific command.",
        ));
        CommandResult::events(output)
    }
}

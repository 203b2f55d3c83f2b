// src/commands/ls/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::errors::ShellError;
use crate::fs::{FsError, ListedEntry};
use crate::output::OutputEvent;

pub struct LsCommand;

/// Every listing shows the same modification stamp.
const DATE_STAMP: &str = "Dec 25 12:00";

fn format_long(entry: &ListedEntry, owner: &str) -> String {
    format!(
        "{} 1 {} {} {} {} {} {}",
        entry.kind.permissions(),
        owner,
        owner,
        entry.size,
        DATE_STAMP,
        entry.kind.icon(),
        entry.name
    )
}

fn format_short(entries: &[ListedEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{} {}", e.kind.icon(), e.name))
        .collect::<Vec<_>>()
        .join("  ")
}

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }
    fn description(&self) -> &'static str {
        "List directory contents"
    }
    fn usage(&self) -> &'static str {
        "ls [-la] [directory]"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let mut long_format = false;
        let mut target: Option<&str> = None;

        for arg in &ctx.args {
            match arg.as_str() {
                "-l" | "-la" | "-al" => long_format = true,
                "" => {}
                _ if arg.starts_with('-') => {
                    // Other options are ignored
                }
                _ => {
                    if target.is_none() {
                        target = Some(arg.as_str());
                    }
                }
            }
        }

        let dir = match target {
            None => ctx.cwd.clone(),
            Some(t) => match ctx.fs.change_directory(&ctx.cwd, t) {
                Ok(dir) => dir,
                Err(err) => {
                    let reason = match err {
                        FsError::NotDirectory { .. } => "Not a directory",
                        FsError::NotFound { .. } => "No such file or directory",
                    };
                    return CommandResult::event(OutputEvent::error(format!(
                        "ls: cannot access '{}': {}",
                        t, reason
                    )));
                }
            },
        };

        let entries = match ctx.fs.list_children(&dir) {
            Ok(entries) => entries,
            Err(err) => return CommandResult::error(ShellError::from_fs("ls", err)),
        };

        if long_format {
            let mut output = vec![OutputEvent::info("total 32")];
            for entry in &entries {
                output.push(OutputEvent::plain(format_long(entry, &ctx.options.username)));
            }
            CommandResult::events(output)
        } else {
            CommandResult::event(OutputEvent::info(format_short(&entries)))
        }
    }
}

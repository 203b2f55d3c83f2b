// src/commands/types.rs
use async_trait::async_trait;
use rand::rngs::StdRng;
use std::sync::Arc;

use crate::config::ShellOptions;
use crate::content::ContentStore;
use crate::errors::ShellError;
use crate::fs::VirtualFs;
use crate::output::OutputEvent;
use crate::playback::PlaybackSequence;
use super::registry::CommandRegistry;

/// What a command produced: lines to print now, an optional timed
/// sequence to play afterwards, and an optional new working directory.
#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    pub output: Vec<OutputEvent>,
    pub playback: Option<PlaybackSequence>,
    pub cwd: Option<String>,
}

impl CommandResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn event(event: OutputEvent) -> Self {
        Self { output: vec![event], ..Self::default() }
    }

    pub fn events(output: Vec<OutputEvent>) -> Self {
        Self { output, ..Self::default() }
    }

    /// One error-styled line.
    pub fn error(err: ShellError) -> Self {
        Self::event(OutputEvent::error(err.to_string()))
    }

    pub fn with_playback(mut self, seq: PlaybackSequence) -> Self {
        self.playback = Some(seq);
        self
    }

    pub fn with_cwd(mut self, cwd: String) -> Self {
        self.cwd = Some(cwd);
        self
    }
}

/// Everything a command may read. Commands never mutate the session
/// directly; they describe the change in their `CommandResult`.
pub struct CommandContext {
    pub args: Vec<String>,
    pub cwd: String,
    pub options: Arc<ShellOptions>,
    pub fs: Arc<VirtualFs>,
    pub content: Arc<ContentStore>,
    pub registry: Arc<CommandRegistry>,
    /// Private to this invocation, derived from the session RNG
    pub rng: StdRng,
}

impl CommandContext {
    /// First argument, or `default` when it is missing or empty.
    pub fn arg_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.args.first() {
            Some(arg) if !arg.is_empty() => arg.as_str(),
            _ => default,
        }
    }
}

/// A registered shell command.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn usage(&self) -> &'static str;
    async fn execute(&self, ctx: CommandContext) -> CommandResult;
}

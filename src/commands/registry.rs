// src/commands/registry.rs
use indexmap::IndexMap;
use super::types::Command;

/// Name-keyed command table. Iteration follows registration order, which
/// is the order `help` lists commands and autocomplete reports matches.
pub struct CommandRegistry {
    commands: IndexMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn list(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Command names starting with `partial`, compared case-insensitively.
    pub fn complete(&self, partial: &str) -> Vec<&str> {
        let partial = partial.to_lowercase();
        self.commands
            .keys()
            .filter(|name| name.starts_with(&partial))
            .map(|s| s.as_str())
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::exit_cmd::ExitCommand;
use super::hack_cmd::HackCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::matrix_cmd::MatrixCommand;
use super::nmap_cmd::NmapCommand;
use super::ping_cmd::PingCommand;
use super::profile_cmds::{AboutCommand, ContactCommand, ProjectsCommand, SkillsCommand};
use super::pwd::PwdCommand;
use super::ssh_cmd::SshCommand;
use super::sudo::SudoCommand;
use super::whoami_cmd::WhoamiCommand;

/// Register every built-in command.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(AboutCommand));
    registry.register(Box::new(SkillsCommand));
    registry.register(Box::new(ProjectsCommand));
    registry.register(Box::new(ContactCommand));
    registry.register(Box::new(NmapCommand));
    registry.register(Box::new(SshCommand));
    registry.register(Box::new(PingCommand));
    registry.register(Box::new(SudoCommand));
    registry.register(Box::new(ExitCommand));
    registry.register(Box::new(HackCommand));
    registry.register(Box::new(MatrixCommand));
    registry.register(Box::new(CdCommand));
}

/// Registry holding every built-in command.
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

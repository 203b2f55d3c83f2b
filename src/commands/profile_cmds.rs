//! Profile commands
//!
//! `about`, `skills`, `projects` and `contact` each print a lead-in line,
//! then a static block once the simulated lookup finishes.

use async_trait::async_trait;
use std::time::Duration;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::OutputEvent;
use crate::playback::{ms, PlaybackSequence};
use crate::portfolio::{self, ABOUT_BANNER, CONTACT_BANNER, PROJECTS_BANNER, SKILLS_BANNER};

fn delayed_block(label: &'static str, lead_in: &str, delay: Duration, banner: &str) -> CommandResult {
    let seq = PlaybackSequence::new(label)
        .after(delay, OutputEvent::success(portfolio::block(banner)));
    CommandResult::event(OutputEvent::info(lead_in)).with_playback(seq)
}

pub struct AboutCommand;

#[async_trait]
impl Command for AboutCommand {
    fn name(&self) -> &'static str {
        "about"
    }
    fn description(&self) -> &'static str {
        "Display information about me"
    }
    fn usage(&self) -> &'static str {
        "about"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        delayed_block("about", "Loading profile...", ms(1000), ABOUT_BANNER)
    }
}

pub struct SkillsCommand;

#[async_trait]
impl Command for SkillsCommand {
    fn name(&self) -> &'static str {
        "skills"
    }
    fn description(&self) -> &'static str {
        "Display my technical skills"
    }
    fn usage(&self) -> &'static str {
        "skills"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        delayed_block("skills", "Scanning skill database...", ms(1500), SKILLS_BANNER)
    }
}

pub struct ProjectsCommand;

#[async_trait]
impl Command for ProjectsCommand {
    fn name(&self) -> &'static str {
        "projects"
    }
    fn description(&self) -> &'static str {
        "Display my projects"
    }
    fn usage(&self) -> &'static str {
        "projects"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        delayed_block("projects", "Loading project repository...", ms(2000), PROJECTS_BANNER)
    }
}

pub struct ContactCommand;

#[async_trait]
impl Command for ContactCommand {
    fn name(&self) -> &'static str {
        "contact"
    }
    fn description(&self) -> &'static str {
        "Display contact information"
    }
    fn usage(&self) -> &'static str {
        "contact"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        delayed_block("contact", "Retrieving contact information...", ms(1000), CONTACT_BANNER)
    }
}

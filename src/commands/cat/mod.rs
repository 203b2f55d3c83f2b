// src/commands/cat/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::errors::ShellError;
use crate::output::OutputEvent;

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }
    fn description(&self) -> &'static str {
        "Display file contents"
    }
    fn usage(&self) -> &'static str {
        "cat <filename>"
    }

    async fn execute(&self, mut ctx: CommandContext) -> CommandResult {
        // Only the first operand is read; lookup is by bare file name.
        let Some(name) = ctx.args.first().cloned() else {
            return CommandResult::error(ShellError::MissingOperand("cat".to_string()));
        };

        match ctx.content.read(&name, &mut ctx.rng) {
            Ok(text) => CommandResult::event(OutputEvent::info(text)),
            Err(err) => CommandResult::error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_util::{lines, make_ctx, make_ctx_in};
    use crate::output::Style;
    use crate::portfolio::SECRETS;

    #[tokio::test]
    async fn test_cat_about() {
        let result = CatCommand.execute(make_ctx(vec!["about.txt"])).await;
        let out = lines(&result.output);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].1, Style::Info);
        assert!(out[0].0.contains("ABOUT ME"));
    }

    #[tokio::test]
    async fn test_cat_ignores_directory() {
        // project files are readable from anywhere
        let result = CatCommand.execute(make_ctx_in(vec!["project2.txt"], "/home/cybersec/blog/images")).await;
        assert!(lines(&result.output)[0].0.contains("Web Application Security Tester"));
    }

    #[tokio::test]
    async fn test_cat_missing_file() {
        let result = CatCommand.execute(make_ctx(vec!["doesnotexist"])).await;
        assert_eq!(
            lines(&result.output),
            vec![("cat: doesnotexist: No such file or directory".to_string(), Style::Error)]
        );
    }

    #[tokio::test]
    async fn test_cat_no_operand() {
        let result = CatCommand.execute(make_ctx(vec![])).await;
        assert_eq!(
            lines(&result.output),
            vec![("cat: missing file operand".to_string(), Style::Error)]
        );
    }

    #[tokio::test]
    async fn test_cat_secret_comes_from_pool() {
        let result = CatCommand.execute(make_ctx(vec!["secret.txt"])).await;
        let text = &lines(&result.output)[0].0;
        assert!(SECRETS.contains(&text.as_str()));
    }
}

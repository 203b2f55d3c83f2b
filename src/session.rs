//! Shell Session
//!
//! Main entry point for the simulated terminal. Ties together the command
//! registry, file system, content store and playback engine, and owns the
//! per-session state: working directory, history and the input line.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::commands::{create_default_registry, CommandContext, CommandRegistry, CommandResult};
use crate::config::ShellOptions;
use crate::content::ContentStore;
use crate::errors::ShellError;
use crate::fs::VirtualFs;
use crate::history::History;
use crate::output::{OutputEvent, OutputSink};
use crate::playback::PlaybackEngine;
use crate::portfolio;

/// Discrete key events the session reacts to. Plain typing edits the input
/// line through `set_input` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Up,
    Down,
    Tab,
}

pub struct Session {
    options: Arc<ShellOptions>,
    fs: Arc<VirtualFs>,
    content: Arc<ContentStore>,
    registry: Arc<CommandRegistry>,
    cwd: String,
    history: History,
    input: String,
    playback: PlaybackEngine,
    rng: StdRng,
}

impl Session {
    /// Create a session over explicit collaborators. Starts in the file
    /// system's home directory.
    pub fn new(
        options: ShellOptions,
        fs: VirtualFs,
        content: ContentStore,
        registry: CommandRegistry,
    ) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cwd = fs.home().to_string();
        if !fs.contains_dir(&cwd) {
            log::warn!("home directory {} is not part of the file system", cwd);
        }
        Self {
            options: Arc::new(options),
            fs: Arc::new(fs),
            content: Arc::new(content),
            registry: Arc::new(registry),
            cwd,
            history: History::new(),
            input: String::new(),
            playback: PlaybackEngine::new(),
            rng,
        }
    }

    /// Session over the bundled portfolio tree, content and every built-in command.
    pub fn with_defaults(options: ShellOptions) -> Self {
        let fs = portfolio::default_tree(&options.home);
        Self::new(options, fs, portfolio::default_content(), create_default_registry())
    }

    /// Lines shown once when the terminal opens.
    pub fn banner(&self, sink: &mut dyn OutputSink) {
        sink.apply(&OutputEvent::plain(""));
        sink.apply(&OutputEvent::success(
            "Terminal initialized successfully! Type \"help\" for available commands.",
        ));
    }

    /// `user@host:path$ `, always from the current state.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$ ", self.options.username, self.options.hostname, self.cwd)
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Dispatch a key event.
    pub async fn handle_key(&mut self, key: Key, sink: &mut dyn OutputSink) {
        match key {
            Key::Enter => self.submit(sink).await,
            Key::Up => self.history_back(),
            Key::Down => self.history_forward(),
            Key::Tab => self.autocomplete(sink),
        }
    }

    /// Echo and run the input line, then clear it whatever the outcome.
    pub async fn submit(&mut self, sink: &mut dyn OutputSink) {
        let line = std::mem::take(&mut self.input);
        self.run_line(&line, sink).await;
    }

    /// Same as typing `line` and pressing enter.
    pub async fn run_line(&mut self, line: &str, sink: &mut dyn OutputSink) {
        let line = line.trim();
        if line.is_empty() {
            sink.apply(&OutputEvent::plain(self.prompt()));
            return;
        }
        self.history.push(line);
        sink.apply(&OutputEvent::plain(format!("{}{}", self.prompt(), line)));
        self.execute(line, sink).await;
    }

    /// Parse and dispatch one non-empty line without touching history.
    pub async fn execute(&mut self, line: &str, sink: &mut dyn OutputSink) {
        let mut tokens = line.split(' ');
        let name = tokens.next().unwrap_or_default().to_lowercase();
        let args: Vec<String> = tokens.map(String::from).collect();

        let registry = self.registry.clone();
        let Some(cmd) = registry.get(&name) else {
            log::debug!("unknown command '{}'", name);
            self.apply(CommandResult::error(ShellError::CommandNotFound(name)), sink);
            return;
        };

        log::debug!("dispatch {} {:?} in {}", name, args, self.cwd);
        let ctx = CommandContext {
            args,
            cwd: self.cwd.clone(),
            options: self.options.clone(),
            fs: self.fs.clone(),
            content: self.content.clone(),
            registry: registry.clone(),
            rng: StdRng::from_rng(&mut self.rng).unwrap_or_else(|_| StdRng::from_entropy()),
        };
        let result = cmd.execute(ctx).await;
        self.apply(result, sink);
    }

    fn apply(&mut self, result: CommandResult, sink: &mut dyn OutputSink) {
        for event in &result.output {
            sink.apply(event);
        }
        if let Some(cwd) = result.cwd {
            self.cwd = cwd;
        }
        if let Some(seq) = result.playback {
            self.playback.schedule(seq);
            log::debug!("{} playback events pending", self.playback.pending());
        }
    }

    pub fn history_back(&mut self) {
        if let Some(line) = self.history.back() {
            self.input = line.to_string();
        }
    }

    pub fn history_forward(&mut self) {
        if let Some(line) = self.history.forward() {
            self.input = line.to_string();
        }
    }

    /// Complete the input line against command names.
    ///
    /// One match replaces the input; several are listed under an echo of
    /// the current line; none leaves everything as is.
    pub fn autocomplete(&mut self, sink: &mut dyn OutputSink) {
        let matches: Vec<String> = self
            .registry
            .complete(&self.input)
            .into_iter()
            .map(String::from)
            .collect();
        match matches.len() {
            0 => {}
            1 => self.input = matches[0].clone(),
            _ => {
                sink.apply(&OutputEvent::plain(format!("{}{}", self.prompt(), self.input)));
                sink.apply(&OutputEvent::info(matches.join("  ")));
            }
        }
    }

    /// Let `elapsed` pass on the playback clock, rendering whatever fell due.
    /// Returns the number of events rendered.
    pub fn advance(&mut self, elapsed: Duration, sink: &mut dyn OutputSink) -> usize {
        let events = self.playback.advance(elapsed);
        for event in &events {
            sink.apply(event);
        }
        events.len()
    }

    /// Render every pending playback event without waiting.
    pub fn drain(&mut self, sink: &mut dyn OutputSink) -> usize {
        let events = self.playback.drain();
        for event in &events {
            sink.apply(event);
        }
        events.len()
    }

    /// Time until the next playback event, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.playback.next_deadline()
    }

    pub fn is_idle(&self) -> bool {
        self.playback.is_idle()
    }
}

/// Split a `-c` script into command lines on `;` and newlines, dropping
/// blank pieces.
pub fn split_script(script: &str) -> Vec<&str> {
    script
        .split(|c| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sudo::DESTRUCTION_LINES;
    use crate::output::{Style, Transcript};
    use crate::playback::ms;

    fn session() -> Session {
        Session::with_defaults(ShellOptions { seed: Some(7), ..Default::default() })
    }

    async fn run(s: &mut Session, t: &mut Transcript, line: &str) {
        s.set_input(line);
        s.handle_key(Key::Enter, t).await;
    }

    #[test]
    fn test_split_script() {
        assert_eq!(split_script("pwd; cd blog\nls"), vec!["pwd", "cd blog", "ls"]);
        assert_eq!(split_script(" ;\n whoami ;; "), vec!["whoami"]);
        assert!(split_script("").is_empty());
    }

    #[tokio::test]
    async fn test_session_defaults() {
        let s = session();
        assert_eq!(s.cwd(), "/home/cybersec");
        assert_eq!(s.prompt(), "root@cybersec:/home/cybersec$ ");
        assert!(s.history().is_empty());
        assert!(s.is_idle());
    }

    #[tokio::test]
    async fn test_banner() {
        let s = session();
        let mut t = Transcript::new();
        s.banner(&mut t);
        assert_eq!(t.len(), 2);
        assert_eq!(t.lines()[1].style, Style::Success);
    }

    #[tokio::test]
    async fn test_pwd_echo_and_idempotence() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "pwd").await;
        run(&mut s, &mut t, "pwd").await;
        assert_eq!(
            t.texts(),
            vec![
                "root@cybersec:/home/cybersec$ pwd",
                "/home/cybersec",
                "root@cybersec:/home/cybersec$ pwd",
                "/home/cybersec",
            ]
        );
        assert_eq!(t.lines()[1], t.lines()[3]);
        assert_eq!(s.input(), "");
    }

    #[tokio::test]
    async fn test_cd_round_trip_and_prompt() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "cd projects").await;
        run(&mut s, &mut t, "pwd").await;
        assert_eq!(t.last().unwrap().text, "/home/cybersec/projects");
        assert_eq!(s.prompt(), "root@cybersec:/home/cybersec/projects$ ");

        run(&mut s, &mut t, "cd ..").await;
        assert_eq!(s.cwd(), "/home/cybersec");
        run(&mut s, &mut t, "cd ..").await;
        assert_eq!(s.cwd(), "/home/cybersec");
    }

    #[tokio::test]
    async fn test_cd_nested_and_absolute() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "cd blog").await;
        run(&mut s, &mut t, "cd images").await;
        assert_eq!(s.cwd(), "/home/cybersec/blog/images");
        run(&mut s, &mut t, "cd ~").await;
        assert_eq!(s.cwd(), "/home/cybersec");
        run(&mut s, &mut t, "cd /home/cybersec/blog").await;
        assert_eq!(s.cwd(), "/home/cybersec/blog");
        run(&mut s, &mut t, "cd").await;
        assert_eq!(s.cwd(), "/home/cybersec");
    }

    #[tokio::test]
    async fn test_home_at_root_or_with_trailing_slash() {
        let cases = [
            ("/", "/", "/projects"),
            ("/home/neo/", "/home/neo", "/home/neo/projects"),
        ];
        for (home, start, projects) in cases {
            let mut s = Session::with_defaults(ShellOptions {
                home: home.to_string(),
                seed: Some(7),
                ..Default::default()
            });
            let mut t = Transcript::new();
            assert_eq!(s.cwd(), start);

            run(&mut s, &mut t, "ls").await;
            assert!(t.last().unwrap().text.contains("📁 projects"));
            run(&mut s, &mut t, "cd projects").await;
            run(&mut s, &mut t, "pwd").await;
            assert_eq!(t.last().unwrap().text, projects);
            run(&mut s, &mut t, "cd ..").await;
            assert_eq!(s.cwd(), start);
        }
    }

    #[tokio::test]
    async fn test_failed_cd_keeps_path() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "cd /etc").await;
        assert_eq!(s.cwd(), "/home/cybersec");
        assert_eq!(t.last().unwrap().text, "cd: /etc: No such file or directory");
        assert_eq!(t.last().unwrap().style, Style::Error);
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "Frobnicate now").await;
        assert_eq!(t.last().unwrap().text, "bash: frobnicate: command not found");
        assert_eq!(t.last().unwrap().style, Style::Error);
        assert_eq!(s.history().entries(), ["Frobnicate now"]);

        // still usable afterwards
        run(&mut s, &mut t, "whoami").await;
        assert_eq!(t.last().unwrap().text, "root");
    }

    #[tokio::test]
    async fn test_command_name_is_case_insensitive() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "PWD").await;
        assert_eq!(t.last().unwrap().text, "/home/cybersec");
    }

    #[tokio::test]
    async fn test_empty_input_not_recorded() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "").await;
        run(&mut s, &mut t, "   ").await;
        assert!(s.history().is_empty());
        assert_eq!(t.texts(), vec!["root@cybersec:/home/cybersec$ "; 2]);
    }

    #[tokio::test]
    async fn test_history_records_repeats() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "ls").await;
        run(&mut s, &mut t, "ls").await;
        assert_eq!(s.history().entries(), ["ls", "ls"]);
    }

    #[tokio::test]
    async fn test_history_navigation() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "ls").await;
        run(&mut s, &mut t, "pwd").await;

        s.handle_key(Key::Up, &mut t).await;
        assert_eq!(s.input(), "pwd");
        s.handle_key(Key::Up, &mut t).await;
        assert_eq!(s.input(), "ls");
        s.handle_key(Key::Up, &mut t).await;
        assert_eq!(s.input(), "ls");
        s.handle_key(Key::Down, &mut t).await;
        assert_eq!(s.input(), "pwd");
        s.handle_key(Key::Down, &mut t).await;
        assert_eq!(s.input(), "");

        s.handle_key(Key::Up, &mut t).await;
        s.handle_key(Key::Enter, &mut t).await;
        assert_eq!(s.history().entries(), ["ls", "pwd", "pwd"]);
        assert_eq!(s.history().cursor(), 3);
    }

    #[tokio::test]
    async fn test_autocomplete_single_match() {
        let mut s = session();
        let mut t = Transcript::new();
        s.set_input("he");
        s.handle_key(Key::Tab, &mut t).await;
        assert_eq!(s.input(), "help");
        assert!(t.is_empty());

        s.set_input("WHO");
        s.autocomplete(&mut t);
        assert_eq!(s.input(), "whoami");
    }

    #[tokio::test]
    async fn test_autocomplete_several_matches() {
        let mut s = session();
        let mut t = Transcript::new();
        s.set_input("s");
        s.autocomplete(&mut t);
        assert_eq!(s.input(), "s");
        assert_eq!(t.texts(), vec!["root@cybersec:/home/cybersec$ s", "skills  ssh  sudo"]);
        assert_eq!(t.last().unwrap().style, Style::Info);
    }

    #[tokio::test]
    async fn test_autocomplete_no_match() {
        let mut s = session();
        let mut t = Transcript::new();
        s.set_input("xyz");
        s.autocomplete(&mut t);
        assert_eq!(s.input(), "xyz");
        assert!(t.is_empty());
    }

    #[tokio::test]
    async fn test_clear() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "whoami").await;
        run(&mut s, &mut t, "clear").await;
        assert!(t.is_empty());
    }

    #[tokio::test]
    async fn test_cat_through_session() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "cat about.txt").await;
        assert!(t.last().unwrap().text.contains("ABOUT ME"));
        run(&mut s, &mut t, "cat doesnotexist").await;
        assert_eq!(t.last().unwrap().text, "cat: doesnotexist: No such file or directory");
    }

    #[tokio::test]
    async fn test_delayed_output_waits_for_clock() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "about").await;
        assert_eq!(t.last().unwrap().text, "Loading profile...");
        assert_eq!(s.next_deadline(), Some(ms(1000)));

        assert_eq!(s.advance(ms(999), &mut t), 0);
        assert_eq!(s.advance(ms(1), &mut t), 1);
        assert!(t.last().unwrap().text.contains("CYBERSEC PORTFOLIO"));
        assert!(s.is_idle());
    }

    #[tokio::test]
    async fn test_input_between_playback_steps() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "ping").await;
        s.advance(ms(1500), &mut t);
        run(&mut s, &mut t, "pwd").await;
        s.advance(ms(10_000), &mut t);

        let texts = t.texts();
        let pwd_at = texts.iter().position(|l| *l == "/home/cybersec").unwrap();
        let replies: Vec<usize> = texts
            .iter()
            .enumerate()
            .filter(|(_, l)| l.starts_with("64 bytes from google.com"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(replies.len(), 4);
        assert!(replies[0] < pwd_at && pwd_at < replies[1]);
    }

    #[tokio::test]
    async fn test_overlapping_pings_interleave() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "ping a").await;
        s.advance(ms(500), &mut t);
        run(&mut s, &mut t, "ping b").await;
        s.drain(&mut t);

        let hosts: Vec<&str> = t
            .texts()
            .into_iter()
            .filter(|l| l.starts_with("64 bytes from"))
            .map(|l| &l[14..15])
            .collect();
        assert_eq!(hosts, vec!["a", "b", "a", "b", "a", "b", "a", "b"]);
    }

    #[tokio::test]
    async fn test_ping_deterministic_with_seed() {
        let mut a = session();
        let mut b = session();
        let mut ta = Transcript::new();
        let mut tb = Transcript::new();
        run(&mut a, &mut ta, "ping").await;
        run(&mut b, &mut tb, "ping").await;
        a.drain(&mut ta);
        b.drain(&mut tb);
        assert_eq!(ta.texts(), tb.texts());
    }

    #[tokio::test]
    async fn test_sudo_rm_rf_theater() {
        let mut s = session();
        let mut t = Transcript::new();
        run(&mut s, &mut t, "sudo rm -rf /").await;
        assert_eq!(t.last().unwrap().text, "[sudo] password for root: ");
        assert!(!t.glitch());

        s.advance(ms(1000), &mut t);
        assert_eq!(t.len(), 4);
        assert_eq!(t.last().unwrap().text, "Are you absolutely sure? (yes/no): ");

        s.advance(ms(2000), &mut t);
        assert!(t.glitch());
        assert_eq!(&t.texts()[4..], &["yes", "", "💀 SYSTEM DESTRUCTION INITIATED 💀"]);

        let before = t.len();
        for (i, expected) in DESTRUCTION_LINES.iter().enumerate() {
            assert_eq!(s.advance(ms(499), &mut t), 0);
            assert_eq!(s.advance(ms(1), &mut t), 1);
            assert_eq!(t.len(), before + i + 1);
            assert_eq!(t.last().unwrap().text, *expected);
            assert!(t.glitch());
        }

        s.advance(ms(500), &mut t);
        assert!(!t.glitch());
        assert!(s.is_idle());
        assert_eq!(t.len(), before + 17);
        assert_eq!(s.cwd(), "/home/cybersec");
    }
}

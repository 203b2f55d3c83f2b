use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::Instant;

use cyber_terminal::{
    split_script, Key, OutputSink, Overrides, Session, ShellOptions, Style, Transcript,
};

#[derive(Parser)]
#[command(name = "cyber-terminal")]
#[command(about = "A simulated portfolio shell with staged hacker theater")]
#[command(version)]
struct Cli {
    /// Run these commands (separated by ';' or newlines) and exit
    #[arg(short = 'c')]
    script: Option<String>,

    /// TOML file with username, hostname, home and seed
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Override the session username
    #[arg(long = "user")]
    user: Option<String>,

    /// Override the session hostname
    #[arg(long = "host")]
    host: Option<String>,

    /// Seed the session RNG for reproducible output
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Do not wait in real time for simulated output
    #[arg(long = "fast")]
    fast: bool,

    /// Print the transcript as JSON instead of coloured text (requires -c)
    #[arg(long = "json")]
    json: bool,
}

/// Renders transcript lines straight to the terminal.
///
/// In raw mode the terminal no longer turns `\n` into a carriage return, and
/// the prompt line being edited has to be wiped before output lands on it.
struct AnsiSink {
    out: std::io::Stdout,
    raw: bool,
}

impl AnsiSink {
    fn new(raw: bool) -> Self {
        Self { out: std::io::stdout(), raw }
    }

    fn colour(style: Style) -> &'static str {
        match style {
            Style::Plain => "",
            Style::Info => "\x1B[36m",
            Style::Success => "\x1B[32m",
            Style::Warning => "\x1B[33m",
            Style::Error => "\x1B[31m",
            Style::Destruction => "\x1B[1;31m",
        }
    }

    /// Redraw the line being typed.
    fn prompt(&mut self, prompt: &str, input: &str) {
        let _ = write!(self.out, "\r\x1B[2K{}{}", prompt, input);
        let _ = self.out.flush();
    }
}

impl OutputSink for AnsiSink {
    fn append(&mut self, text: &str, style: Style) {
        let colour = Self::colour(style);
        let reset = if colour.is_empty() { "" } else { "\x1B[0m" };
        if self.raw {
            let text = text.replace('\n', "\r\n");
            let _ = write!(self.out, "\r\x1B[2K{}{}{}\r\n", colour, text, reset);
        } else {
            let _ = writeln!(self.out, "{}{}{}", colour, text, reset);
        }
        let _ = self.out.flush();
    }

    fn clear(&mut self) {
        let _ = write!(self.out, "\x1B[2J\x1B[H");
        let _ = self.out.flush();
    }

    fn set_glitch(&mut self, on: bool) {
        // reverse-video screen mode
        let _ = write!(self.out, "{}", if on { "\x1B[?5h" } else { "\x1B[?5l" });
        let _ = self.out.flush();
    }
}

/// What a terminal key press means to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Key(Key),
    Char(char),
    Backspace,
    Quit,
}

fn translate(key: &KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => Some(Input::Key(Key::Enter)),
        KeyCode::Up => Some(Input::Key(Key::Up)),
        KeyCode::Down => Some(Input::Key(Key::Down)),
        KeyCode::Tab => Some(Input::Key(Key::Tab)),
        KeyCode::Backspace => Some(Input::Backspace),
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => Some(Input::Quit),
        KeyCode::Char(c) if !ctrl => Some(Input::Char(c)),
        _ => None,
    }
}

/// Leaves raw mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Forward key presses from a blocking reader thread until the receiver goes away.
fn spawn_key_reader() -> mpsc::UnboundedReceiver<KeyEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(Duration::from_millis(50)) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        if tx.send(key).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        log::error!("failed to read key event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    log::error!("failed to poll key events: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

fn load_options(cli: &Cli) -> ShellOptions {
    let options = match &cli.config {
        Some(path) => match ShellOptions::load(path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => ShellOptions::default(),
    };
    options.with_overrides(Overrides {
        username: cli.user.clone(),
        hostname: cli.host.clone(),
        seed: cli.seed,
    })
}

/// Wait out the session's pending playback, rendering as it falls due.
async fn play_out(session: &mut Session, sink: &mut dyn OutputSink, fast: bool) {
    if fast {
        session.drain(sink);
        return;
    }
    while let Some(wait) = session.next_deadline() {
        tokio::time::sleep(wait).await;
        session.advance(wait, sink);
    }
}

async fn run_script(session: &mut Session, script: &str, cli: &Cli) {
    let lines = split_script(script);

    if cli.json {
        let mut transcript = Transcript::new();
        for line in lines {
            session.run_line(line, &mut transcript).await;
            session.drain(&mut transcript);
        }
        match serde_json::to_string_pretty(transcript.lines()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let mut sink = AnsiSink::new(false);
    for line in lines {
        session.run_line(line, &mut sink).await;
        play_out(session, &mut sink, cli.fast).await;
    }
}

/// Edit the input line key by key in raw mode while playback keeps running.
async fn run_keys(session: &mut Session, fast: bool) -> std::io::Result<()> {
    let _raw = RawModeGuard::enable()?;
    let mut sink = AnsiSink::new(true);
    session.banner(&mut sink);
    sink.prompt(&session.prompt(), session.input());

    let mut keys = spawn_key_reader();
    let mut last_tick = Instant::now();

    loop {
        if fast {
            session.drain(&mut sink);
        }
        let deadline = session.next_deadline().unwrap_or(Duration::from_secs(3600));

        tokio::select! {
            key = keys.recv() => {
                let now = Instant::now();
                session.advance(now - last_tick, &mut sink);
                last_tick = now;
                let Some(key) = key else {
                    break;
                };
                match translate(&key) {
                    Some(Input::Key(key)) => session.handle_key(key, &mut sink).await,
                    Some(Input::Char(c)) => {
                        let mut input = session.input().to_string();
                        input.push(c);
                        session.set_input(input);
                    }
                    Some(Input::Backspace) => {
                        let mut input = session.input().to_string();
                        input.pop();
                        session.set_input(input);
                    }
                    Some(Input::Quit) => break,
                    None => {}
                }
            }
            _ = tokio::time::sleep(deadline) => {
                let now = Instant::now();
                session.advance(now - last_tick, &mut sink);
                last_tick = now;
            }
        }
        sink.prompt(&session.prompt(), session.input());
    }

    let _ = write!(std::io::stdout(), "\r\n");
    Ok(())
}

/// Read whole lines from stdin while playback keeps running in real time.
async fn run_lines(session: &mut Session, fast: bool) {
    let mut sink = AnsiSink::new(false);
    session.banner(&mut sink);

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut last_tick = Instant::now();

    loop {
        if fast {
            session.drain(&mut sink);
        }
        let deadline = session.next_deadline().unwrap_or(Duration::from_secs(3600));

        tokio::select! {
            line = stdin.next_line() => {
                let now = Instant::now();
                session.advance(now - last_tick, &mut sink);
                last_tick = now;
                match line {
                    Ok(Some(line)) => {
                        session.set_input(line);
                        session.submit(&mut sink).await;
                    }
                    Ok(None) => break,
                    Err(e) => {
                        log::error!("failed to read input: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::time::sleep(deadline) => {
                let now = Instant::now();
                session.advance(now - last_tick, &mut sink);
                last_tick = now;
            }
        }
    }

    play_out(session, &mut sink, fast).await;
}


#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = load_options(&cli);
    log::debug!("starting session as {}@{}", options.username, options.hostname);

    let mut session = Session::with_defaults(options);

    if let Some(script) = cli.script.clone() {
        run_script(&mut session, &script, &cli).await;
        return;
    }

    if cli.json {
        eprintln!("Error: --json needs a script given with -c");
        std::process::exit(1);
    }

    if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        if let Err(e) = run_keys(&mut session, cli.fast).await {
            log::warn!("raw terminal mode unavailable ({}), reading lines instead", e);
            run_lines(&mut session, cli.fast).await;
        }
        return;
    }

    run_lines(&mut session, cli.fast).await;
}

//! Output Model
//!
//! Styled transcript lines and the sink trait the shell renders into.

use serde::Serialize;

/// Presentation class attached to every transcript line.
///
/// Serializes as its [`Style::tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Style {
    #[default]
    #[serde(rename = "")]
    Plain,
    #[serde(rename = "info-text")]
    Info,
    #[serde(rename = "success-text")]
    Success,
    #[serde(rename = "warning-text")]
    Warning,
    #[serde(rename = "error-text")]
    Error,
    #[serde(rename = "destruction-warning")]
    Destruction,
}

impl Style {
    /// The tag a page renderer keys its styling on.
    pub fn tag(&self) -> &'static str {
        match self {
            Style::Plain => "",
            Style::Info => "info-text",
            Style::Success => "success-text",
            Style::Warning => "warning-text",
            Style::Error => "error-text",
            Style::Destruction => "destruction-warning",
        }
    }
}

/// A single thing the shell asks the sink to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    Line { text: String, style: Style },
    Clear,
    Glitch(bool),
}

impl OutputEvent {
    pub fn line(text: impl Into<String>, style: Style) -> Self {
        OutputEvent::Line { text: text.into(), style }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::line(text, Style::Plain)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::line(text, Style::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::line(text, Style::Success)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::line(text, Style::Warning)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::line(text, Style::Error)
    }

    pub fn destruction(text: impl Into<String>) -> Self {
        Self::line(text, Style::Destruction)
    }
}

/// Where rendered output goes. The shell never reads back from it.
pub trait OutputSink {
    fn append(&mut self, text: &str, style: Style);
    fn clear(&mut self);
    fn set_glitch(&mut self, on: bool);

    fn apply(&mut self, event: &OutputEvent) {
        match event {
            OutputEvent::Line { text, style } => self.append(text, *style),
            OutputEvent::Clear => self.clear(),
            OutputEvent::Glitch(on) => self.set_glitch(*on),
        }
    }
}

/// One rendered line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub text: String,
    pub style: Style,
}

/// In-memory sink that keeps every line it is given.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<Line>,
    glitch: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn last(&self) -> Option<&Line> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn glitch(&self) -> bool {
        self.glitch
    }
}

impl OutputSink for Transcript {
    fn append(&mut self, text: &str, style: Style) {
        self.lines.push(Line { text: text.to_string(), style });
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn set_glitch(&mut self, on: bool) {
        self.glitch = on;
    }
}

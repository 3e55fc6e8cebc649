//! Console output: a fixed color palette and a line writer.

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Categories of console text, each with a fixed color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section headers
    Title,
    /// Neutral notices
    Info,
    /// Recoverable problems and hints
    Warning,
    /// Failures
    Error,
    /// Labels in key/value lines
    Key,
    /// Values in key/value lines
    Value,
}

impl Tone {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Title => text.bright_cyan().bold(),
            Self::Info => text.bright_green(),
            Self::Warning => text.bright_yellow(),
            Self::Error => text.bright_red(),
            Self::Key => text.bright_blue(),
            Self::Value => text.bright_white(),
        }
    }
}

/// Line-oriented report writer
///
/// Every handler writes through a `Console`, so tests can capture the exact
/// text with [`Console::buffer`].
pub struct Console<W: Write = io::Stdout> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    /// Console on standard output
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl Console<Vec<u8>> {
    /// Uncolored in-memory console
    #[must_use]
    pub const fn buffer() -> Self {
        Self {
            out: Vec::new(),
            color: false,
        }
    }

    /// Everything written so far
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl<W: Write> Console<W> {
    /// Wrap any writer
    pub const fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    fn styled(&self, tone: Tone, text: &str) -> String {
        if self.color {
            tone.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Write one line in a single tone
    pub fn say(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        let line = self.styled(tone, text);
        writeln!(self.out, "{line}")
    }

    /// Section header
    pub fn title(&mut self, text: &str) -> io::Result<()> {
        self.say(Tone::Title, text)
    }

    /// Neutral notice
    pub fn info(&mut self, text: &str) -> io::Result<()> {
        self.say(Tone::Info, text)
    }

    /// Warning line
    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        self.say(Tone::Warning, text)
    }

    /// Error line
    pub fn error(&mut self, text: &str) -> io::Result<()> {
        self.say(Tone::Error, text)
    }

    /// Uncolored text, written as-is plus a newline
    pub fn plain(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// `Key: value`
    pub fn key_value(&mut self, key: &str, value: &str) -> io::Result<()> {
        let key = self.styled(Tone::Key, &format!("{key}: "));
        let value = self.styled(Tone::Value, value);
        writeln!(self.out, "{key}{value}")
    }

    /// `  22/tcp - ssh`
    pub fn port_line(&mut self, port: &str, service: &str) -> io::Result<()> {
        let port = self.styled(Tone::Key, &format!("  {port}"));
        let service = self.styled(Tone::Value, &format!(" - {service}"));
        writeln!(self.out, "{port}{service}")
    }

    /// Flush buffered output
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Spinner on stderr while a long-running step is in progress
///
/// Hidden when stderr is not a terminal or `enabled` is false.
#[must_use]
pub fn spinner(message: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

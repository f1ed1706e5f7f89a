// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to stderr; stdout carries rendered answers.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Outcome class of a rendered status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Caution,
    Note,
}

impl Tone {
    fn marker(self) -> ColoredString {
        match self {
            Tone::Success => "✓".green().bold(),
            Tone::Failure => "✗".red().bold(),
            Tone::Caution => "⚠".yellow().bold(),
            Tone::Note => "ℹ".blue().bold(),
        }
    }

    fn paint(self, msg: &str) -> ColoredString {
        match self {
            Tone::Success => msg.green(),
            Tone::Failure => msg.red(),
            Tone::Caution => msg.yellow(),
            Tone::Note => msg.normal(),
        }
    }
}

/// One marker-prefixed line; colour is dropped when `colored` is overridden off.
pub fn status_line(tone: Tone, msg: &str) -> String {
    format!("{} {}", tone.marker(), tone.paint(msg))
}

pub fn format_success(msg: &str) -> String {
    status_line(Tone::Success, msg)
}

pub fn format_error(msg: &str) -> String {
    status_line(Tone::Failure, msg)
}

pub fn format_warning(msg: &str) -> String {
    status_line(Tone::Caution, msg)
}

pub fn format_info(msg: &str) -> String {
    status_line(Tone::Note, msg)
}

/// Section title above a block of output.
pub fn format_heading(msg: &str) -> String {
    msg.cyan().bold().to_string()
}

//! Terminal output for command results.
//!
//! Everything the operator reads goes to stdout; diagnostics go to stderr via
//! `tracing` so the two never interleave. `RenderSink` is the injectable
//! contract the loop writes to, so handler tests can capture lines instead of
//! printing to a terminal.

use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

const SECTION_BULLET: &str = "•";
const INDENT: &str = "   ";
const PROMPT: &str = "\nFSUIPC> ";
const ERROR_LABEL: &str = "Error:";

/// Injectable rendering interface used by the command loop.
pub trait RenderSink {
    /// Print the interactive input prompt without a trailing newline.
    fn prompt(&self);
    /// Print a titled section header.
    fn section(&self, title: &str);
    /// Print one key/value row under a section.
    fn field(&self, key: &str, value: &str);
    /// Print a standalone activity/confirmation line.
    fn activity(&self, text: &str);
    /// Print an operation-failure line.
    fn warn(&self, msg: &str);
    /// Print an error line for a failed client call.
    fn error(&self, msg: &str);
}

/// Default terminal renderer with an on/off color toggle.
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl RenderSink for Renderer {
    fn prompt(&self) {
        if self.color {
            print!("{}", PROMPT.with(Color::Cyan).bold());
        } else {
            print!("{PROMPT}");
        }
        let _ = io::stdout().flush();
    }

    fn section(&self, title: &str) {
        if self.color {
            println!(
                "{} {}",
                SECTION_BULLET.with(Color::DarkGrey),
                title.with(Color::White).bold()
            );
        } else {
            println!("{title}:");
        }
    }

    fn field(&self, key: &str, value: &str) {
        if self.color {
            println!(
                "{INDENT}{} {}",
                format!("{key}:").with(Color::DarkGrey),
                value.with(Color::White)
            );
        } else {
            println!("{INDENT}{key}: {value}");
        }
    }

    fn activity(&self, text: &str) {
        if self.color {
            println!(
                "{} {}",
                SECTION_BULLET.with(Color::DarkGrey),
                text.with(Color::Green)
            );
        } else {
            println!("{text}");
        }
    }

    fn warn(&self, msg: &str) {
        if self.color {
            println!("{} {msg}", SECTION_BULLET.with(Color::Yellow));
        } else {
            println!("{msg}");
        }
    }

    fn error(&self, msg: &str) {
        if self.color {
            println!("{} {msg}", ERROR_LABEL.with(Color::Red).bold());
        } else {
            println!("{ERROR_LABEL} {msg}");
        }
    }
}

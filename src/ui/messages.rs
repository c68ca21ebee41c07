//! One-line user notifications (the CLI's "toasts").
//!
//! Colours are dropped when `NO_COLOR` is set or the stream is not a terminal.

use ansi_term::{Colour, Style};
use std::fmt;
use std::io::{self, IsTerminal};

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn colour_enabled(stderr: bool) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if stderr {
        io::stderr().is_terminal()
    } else {
        io::stdout().is_terminal()
    }
}

fn decorate(colour: Colour, icon: &str, msg: &dyn fmt::Display, stderr: bool) -> String {
    if colour_enabled(stderr) {
        format!("{} {}", Style::new().bold().fg(colour).paint(icon), msg)
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", decorate(Colour::Blue, ICON_INFO, &msg, false));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", decorate(Colour::Green, ICON_OK, &msg, false));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", decorate(Colour::Yellow, ICON_WARN, &msg, false));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", decorate(Colour::Red, ICON_ERR, &msg, true));
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    if colour_enabled(false) {
        println!("{}", Style::new().bold().fg(Colour::Blue).paint(format!("== {msg}")));
    } else {
        println!("== {msg}");
    }
}

//! Output surfaces for results, help and errors.
//!
//! `Console` writes straight to stdout/stderr. `Window` renders a framed
//! block on stderr and holds it until the user presses return.

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

const RULE_WIDTH: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Console,
    Window,
}

impl Surface {
    pub fn new(window: bool) -> Self {
        if window {
            Surface::Window
        } else {
            Surface::Console
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Output,
    Error,
    Help,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Output => write!(f, "output"),
            MessageKind::Error => write!(f, "error"),
            MessageKind::Help => write!(f, "help"),
        }
    }
}

/// Frame a message for the window surface.
pub fn frame(kind: MessageKind, name: &str, message: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\n{name} {kind}:\n{rule}\n{}\n\nPress <return> to close",
        message.trim_end()
    )
}

/// Render an error with its chain of causes, one per line.
pub fn error_report(error: &dyn Error) -> String {
    let mut report = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        report.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    report
}

/// Show a message on `surface` using the process's standard streams.
pub fn show(surface: Surface, kind: MessageKind, name: &str, message: &str) -> io::Result<()> {
    let stdin = io::stdin();
    show_to(
        surface,
        kind,
        name,
        message,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        &mut stdin.lock(),
    )
}

/// Show a message on `surface` using the given streams.
pub fn show_to(
    surface: Surface,
    kind: MessageKind,
    name: &str,
    message: &str,
    out: &mut impl Write,
    err: &mut impl Write,
    input: &mut impl BufRead,
) -> io::Result<()> {
    match (surface, kind) {
        (Surface::Console, MessageKind::Error) => writeln!(err, "{}", message.trim_end()),
        (Surface::Console, _) => writeln!(out, "{}", message.trim_end()),
        (Surface::Window, _) => {
            writeln!(err, "{}", frame(kind, name, message))?;
            err.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            Ok(())
        }
    }
}

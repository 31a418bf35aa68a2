/// Parsing of operator input lines into session commands.
use elorank_core::{Decision, Pair};

/// What the operator asked for while a pair is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The left item is preferred.
    Left,
    /// The right item is preferred.
    Right,
    /// Draw a different pair without recording anything.
    Skip,
    /// End the session.
    Quit,
}

impl Command {
    /// The decision this command makes about `shown`, if any.
    pub fn decision(self, shown: &Pair) -> Option<Decision> {
        let (left, right) = shown;
        match self {
            Command::Left => Some(Decision::new(left.clone(), right.clone())),
            Command::Right => Some(Decision::new(right.clone(), left.clone())),
            Command::Skip | Command::Quit => None,
        }
    }
}

pub const INPUT_HELP: &str = "l = left preferred, r = right preferred, s = skip, q = quit";

/// Parse one input line. `None` if it is not a recognized command.
///
/// Accepts the arrow-key escape sequences a terminal sends in line mode, so
/// pressing ← or → then Enter works.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "l" | "1" | "left" | "\x1b[d" => Some(Command::Left),
        "r" | "2" | "right" | "\x1b[c" => Some(Command::Right),
        "s" | "skip" => Some(Command::Skip),
        "q" | "quit" | "exit" | "\x1b" => Some(Command::Quit),
        _ => None,
    }
}

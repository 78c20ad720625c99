use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// A user command interpreted at a run-loop checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle auto-refresh off (auto mode only).
    ToggleAuto,
    /// Fetch a fresh snapshot now.
    Refresh,
    /// Switch from manual mode into auto-refresh.
    EnableAuto,
    /// Stop the monitor.
    Quit,
}

/// Interpret one input line. The same key means different things depending
/// on the mode: in auto mode `r` (or an empty line) refreshes immediately,
/// while at the manual prompt `r` enables auto-refresh and any other line
/// refreshes. `q`, `quit`, and `exit` always quit.
pub fn parse_command(line: &str, auto_refresh: bool) -> Option<Command> {
    let token = line.trim().to_lowercase();
    if matches!(token.as_str(), "q" | "quit" | "exit") {
        return Some(Command::Quit);
    }
    if auto_refresh {
        match token.as_str() {
            "m" => Some(Command::ToggleAuto),
            "r" | "" => Some(Command::Refresh),
            _ => None,
        }
    } else {
        match token.as_str() {
            "r" => Some(Command::EnableAuto),
            _ => Some(Command::Refresh),
        }
    }
}

/// Spawn the stdin listener task for the process lifetime.
///
/// Raw lines flow over the returned channel; interpretation happens in the
/// run loop, which knows the current mode. On stdin EOF the sender drops
/// and the channel closes, which the loop treats as quit. The task holds no
/// shared state and is simply abandoned at process exit.
pub fn spawn_stdin_listener() -> UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

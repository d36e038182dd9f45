//! Terminal front-end — renders session state and drives the controller.
//!
//! DESIGN
//! ======
//! The presentation layer only talks to the core through
//! `SessionController::{fetch, regenerate, reset, subscribe}`. In interactive
//! mode a render task follows the watch channel and redraws on every
//! transition. The task is tied to a `RenderTask` guard and aborted when the
//! session loop exits.

use std::fmt::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::link;
use crate::session::{SessionController, SessionState};

/// Topic shortcuts offered on the landing screen.
pub const PRESETS: [(&str, &str); 5] = [
    ("💻", "Computer Science"),
    ("🖥️", "Information Technology"),
    ("🤖", "Artificial Intelligence"),
    ("🧠", "Machine Learning"),
    ("⚙️", "System Development"),
];

/// Look up a preset topic by its 1-based number.
#[must_use]
pub fn preset(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|index| PRESETS.get(index))
        .map(|(_, text)| *text)
}

#[must_use]
pub fn render_presets() -> String {
    let mut out = String::new();
    for (i, (emoji, text)) in PRESETS.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {emoji} {text}", i + 1);
    }
    out
}

/// Render the session the way the results pane shows it.
#[must_use]
pub fn render_state(state: &SessionState) -> String {
    let mut out = String::new();

    if state.has_results_area() {
        let _ = writeln!(out, "You asked for:\n  {}", state.query);
    }
    if let Some(error) = &state.error {
        let _ = writeln!(out, "Error: {error}");
    }
    if state.is_loading {
        let _ = writeln!(out, "Generating titles...");
    } else {
        for (i, suggestion) in state.suggestions.iter().enumerate() {
            let _ = writeln!(out, "\n{}. {}\n   {}", i + 1, suggestion.title, suggestion.brief_overview);
        }
    }

    out
}

// =============================================================================
// INTERACTIVE SESSION
// =============================================================================

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Preset(usize),
    Regenerate,
    Reset,
    Quit,
    Ignore,
}

#[must_use]
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed {
        "" => Command::Ignore,
        ":r" | ":regenerate" => Command::Regenerate,
        ":x" | ":reset" => Command::Reset,
        ":q" | ":quit" => Command::Quit,
        _ => match trimmed.strip_prefix(':').and_then(|n| n.parse::<usize>().ok()) {
            Some(number) => Command::Preset(number),
            None => Command::Submit(line.to_string()),
        },
    }
}

/// Aborts the render task when the session loop ends.
struct RenderTask(JoinHandle<()>);

impl Drop for RenderTask {
    fn drop(&mut self) {
        self.0.abort();
    }
}

async fn follow(mut rx: watch::Receiver<SessionState>) {
    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        println!("{}", render_state(&state));
    }
}

/// Line-oriented session on stdin/stdout.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub async fn run_interactive(
    controller: SessionController,
    share_base: &str,
    initial: Option<String>,
) -> std::io::Result<()> {
    let _render = RenderTask(tokio::spawn(follow(controller.subscribe())));

    println!("ThinkOfATitle. Type a topic, :r regenerate, :x reset, :N preset, :q quit.");
    print!("{}", render_presets());

    if let Some(query) = initial {
        submit(&controller, share_base, &query).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Submit(query) => submit(&controller, share_base, &query).await,
            Command::Preset(number) => match preset(number) {
                Some(query) => submit(&controller, share_base, query).await,
                None => println!("No preset {number}."),
            },
            Command::Regenerate => {
                let query = controller.snapshot().query;
                if controller.regenerate().await.is_some() {
                    print_link(share_base, &query);
                }
            }
            Command::Reset => {
                controller.reset();
                if let Ok(root) = link::reset_link(share_base) {
                    println!("Link: {root}");
                }
            }
            Command::Quit => break,
            Command::Ignore => {}
        }
    }

    debug!("interactive: session closed");
    Ok(())
}

async fn submit(controller: &SessionController, share_base: &str, query: &str) {
    if query.trim().is_empty() {
        return;
    }
    print_link(share_base, query);
    controller.fetch(query).await;
}

fn print_link(share_base: &str, query: &str) {
    if let Ok(link) = link::share_link(share_base, query) {
        println!("Link: {link}");
    }
}

#[cfg(test)]
#[path = "frontend_test.rs"]
mod tests;

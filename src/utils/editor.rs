//! External editor integration for composing longer messages.

use std::fs;
use std::io;
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::debug;

/// Open `$EDITOR` on a temp file seeded with the current input buffer.
///
/// Returns the composed message, `Ok(None)` when the user left the file
/// empty, or a user-facing status string when the editor is unavailable or
/// fails. The terminal is taken out of raw mode for the editor's lifetime
/// and restored afterwards.
pub fn compose_in_editor(initial: &str) -> Result<Option<String>, String> {
    let editor = match std::env::var("EDITOR") {
        Ok(editor) if !editor.trim().is_empty() => editor,
        _ => {
            return Err(
                "No EDITOR environment variable set (e.g. export EDITOR=nano)".to_string(),
            )
        }
    };

    let temp_file =
        NamedTempFile::new().map_err(|e| format!("Could not create temp file: {e}"))?;
    let temp_path = temp_file.path().to_path_buf();
    if !initial.is_empty() {
        fs::write(&temp_path, initial).map_err(|e| format!("Could not seed temp file: {e}"))?;
    }

    suspend_tui().map_err(|e| format!("Could not suspend terminal: {e}"))?;
    debug!(%editor, "launching external editor");
    let status = Command::new(&editor).arg(&temp_path).status();
    resume_tui().map_err(|e| format!("Could not restore terminal: {e}"))?;

    let status = status.map_err(|e| format!("Could not launch `{editor}`: {e}"))?;
    if !status.success() {
        return Err(format!("Editor exited with non-zero status: {status}"));
    }

    let content =
        fs::read_to_string(&temp_path).map_err(|e| format!("Could not read edited file: {e}"))?;
    if content.trim().is_empty() {
        Ok(None)
    } else {
        // Drop trailing newlines but keep internal formatting.
        Ok(Some(content.trim_end().to_string()))
    }
}

fn suspend_tui() -> io::Result<()> {
    ratatui::crossterm::terminal::disable_raw_mode()?;
    ratatui::crossterm::execute!(
        io::stdout(),
        ratatui::crossterm::terminal::LeaveAlternateScreen
    )
}

fn resume_tui() -> io::Result<()> {
    ratatui::crossterm::terminal::enable_raw_mode()?;
    ratatui::crossterm::execute!(
        io::stdout(),
        ratatui::crossterm::terminal::EnterAlternateScreen
    )
}

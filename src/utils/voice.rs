//! Voice capture via an external transcriber command.
//!
//! The command is user-configured (`voice_command` in the config file or the
//! `INFOAGENT_VOICE_COMMAND` environment variable). It is expected to record
//! one finished utterance and print the transcript on stdout.

use std::process::{Command, Stdio};
use tracing::debug;

/// Run the configured transcriber and return the captured text.
///
/// Errors are user-facing status strings; an unconfigured or failing
/// transcriber never affects chat functionality.
pub fn capture(command: Option<&str>) -> Result<String, String> {
    let command = command.ok_or_else(|| {
        "Voice capture is not configured (set voice_command or INFOAGENT_VOICE_COMMAND)"
            .to_string()
    })?;

    debug!(%command, "running voice transcriber");
    let output = shell_command(command)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| format!("Could not run transcriber: {e}"))?;

    if !output.status.success() {
        return Err(format!(
            "Transcriber exited with non-zero status: {}",
            output.status
        ));
    }

    let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if transcript.is_empty() {
        Err("Transcriber produced no text".to_string())
    } else {
        Ok(transcript)
    }
}

fn shell_command(command: &str) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    }
    #[cfg(not(target_os = "windows"))]
    {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

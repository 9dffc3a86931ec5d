//! Clipboard support for the shareable link
//!
//! Uses the first available tool: pbcopy (macOS), wl-copy (Wayland),
//! xclip or xsel (X11).

use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard tools in priority order (program followed by its arguments)
const CLIPBOARD_COMMANDS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    for cmd_args in CLIPBOARD_COMMANDS {
        let program = cmd_args[0];
        if !is_available(program) {
            continue;
        }

        if pipe_to(program, &cmd_args[1..], text)? {
            tracing::debug!(program, "copied to clipboard");
            return Ok(());
        }
    }

    Err("No clipboard tool found (install pbcopy, xclip, or wl-copy)".to_string())
}

/// Feed `text` to `program` on stdin; `Ok(false)` if it exited unsuccessfully
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<bool, String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("Failed to start {}: {}", program, e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| format!("Failed to write to {}: {}", program, e))?;
    }

    let status = child
        .wait()
        .map_err(|e| format!("Failed to wait for {}: {}", program, e))?;
    Ok(status.success())
}

/// Check if a command is available on the system
fn is_available(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

//! Clipboard support through the OSC 52 terminal escape sequence.
//!
//! Works over SSH and inside multiplexers that forward OSC 52, without any
//! platform clipboard library.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use crossterm::{execute, style::Print};
use std::io::{self, Write};

/// Escape sequence asking the terminal to put `text` on the system clipboard
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Copy `text` to the clipboard of the terminal attached to `writer`
pub fn copy_to<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    execute!(writer, Print(osc52_sequence(text))).context("Failed to write clipboard escape sequence")
}

/// Copy `text` to the clipboard of the controlling terminal
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    copy_to(&mut io::stdout(), text)
}

//! Terminal rendering of transcript messages.

use little_chat_core::{Message, Sender};
use owo_colors::OwoColorize;

/// Prefix of every rendered line.
pub const BAR_CHAR: &str = "▎";

/// Formats a message for the terminal.
///
/// Returns `None` for the pending placeholder, which is shown as a
/// spinner instead. Multi-line messages keep the bar on every line.
pub fn format_message(message: &Message) -> Option<String> {
    if message.is_pending() {
        return None;
    }

    let (bar, label) = match message.sender() {
        Sender::User => (BAR_CHAR.bright_green().to_string(), "🙂"),
        Sender::Bot => (BAR_CHAR.bright_cyan().to_string(), "🤖"),
    };

    let mut lines = message.text().lines();
    let first = lines.next().unwrap_or_default();
    let mut out = format!("{bar}{label} {}", first.bright_white());
    for line in lines {
        out.push('\n');
        out.push_str(&format!("{bar}   {}", line.bright_white()));
    }
    Some(out)
}

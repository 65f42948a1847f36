//! Commit message presentation.

use super::colors::Theme;

/// Shown instead of a frame when the model returned nothing usable.
pub const NO_MESSAGE_PLACEHOLDER: &str = "No commit message generated";

/// `title`, a rule, `message`, a rule; one per line.
pub fn frame_message(title: &str, message: &str, theme: &Theme) -> String {
    let rule = theme.rule();
    format!(
        "{}\n{}\n{}\n{}\n",
        theme.header(title),
        rule,
        message.trim(),
        rule
    )
}

/// Display form of a parsed commit message.
///
/// An empty message yields [`NO_MESSAGE_PLACEHOLDER`].
pub fn format_for_display(message: &str, theme: &Theme) -> String {
    if message.trim().is_empty() {
        return format!("{}\n", theme.warning(NO_MESSAGE_PLACEHOLDER));
    }
    frame_message("Generated commit message:", message, theme)
}

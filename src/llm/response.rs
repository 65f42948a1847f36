//! Model response cleanup.

use std::sync::LazyLock;

use regex::Regex;

/// First fenced block, optional language tag on the opening fence.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:[0-9A-Za-z_]+)?[\t\n\f\r ]*\n([\s\S]*?)\n```")
        .unwrap_or_else(|e| unreachable!("fenced block pattern: {e}"))
});

/// First inline code span.
static INLINE_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`([^`]+)`").unwrap_or_else(|e| unreachable!("inline span pattern: {e}"))
});

/// Extracts the commit message from a raw model response.
///
/// 1. trims surrounding whitespace
/// 2. returns the trimmed interior of the first fenced block, if any
/// 3. else the trimmed interior of the first inline code span, if any
/// 4. else the trimmed text itself
///
/// Only the first match of each pattern is used.
pub fn parse_commit_message(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(inner) = FENCED_BLOCK.captures(trimmed).and_then(|c| c.get(1)) {
        return inner.as_str().trim().to_string();
    }

    if let Some(inner) = INLINE_SPAN.captures(trimmed).and_then(|c| c.get(1)) {
        return inner.as_str().trim().to_string();
    }

    trimmed.to_string()
}

//! Text utilities for TUI rendering.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` (unicode-aware).
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Keeps the end of a string, prefixing `…` when it exceeds `max_width`.
///
/// Used for input fields so the cursor end stays visible while typing.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut tail: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        tail.push(ch);
    }
    let mut truncated = String::from("…");
    truncated.extend(tail.into_iter().rev());
    truncated
}

/// Strips escape characters and expands tabs in text that came from the
/// service, so it cannot mess with the terminal.
pub fn sanitize_for_display(s: &str) -> Cow<'_, str> {
    if s.chars().any(|c| c.is_control()) {
        Cow::Owned(
            s.replace('\t', "    ")
                .chars()
                .filter(|c| !c.is_control())
                .collect(),
        )
    } else {
        Cow::Borrowed(s)
    }
}

//! Text helpers shared by the metadata builders.

/// Appended to descriptions that were shortened.
pub const ELLIPSIS: &str = "...";

/// Collapses runs of whitespace (including newlines) into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ends `text` with sentence punctuation, adding a period if needed.
pub fn as_sentence(text: &str) -> String {
    let text = text.trim();
    if text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

/// Shortens `text` to at most `limit` characters at a word boundary.
///
/// Text that already fits is returned unchanged (apart from trimming) and
/// never gains an ellipsis. Otherwise the text is cut at the last whitespace
/// boundary that leaves room for [`ELLIPSIS`] and the ellipsis is appended,
/// so the result never exceeds `limit`. A single word longer than the budget
/// is the only case that gets cut mid-word. A `limit` too small to hold any
/// text plus the ellipsis yields a plain hard cut with no ellipsis.
///
/// Lengths are counted in characters, not bytes.
pub fn truncate_at_word(text: &str, limit: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= limit {
        return text.to_string();
    }

    if limit <= ELLIPSIS.len() {
        return text.chars().take(limit).collect();
    }

    let budget = limit - ELLIPSIS.len();
    let cut = text
        .char_indices()
        .nth(budget)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let head = &text[..cut];

    let ends_on_boundary = text[cut..].starts_with(char::is_whitespace);
    let body = if ends_on_boundary {
        head
    } else {
        match head.rfind(char::is_whitespace) {
            Some(idx) => &head[..idx],
            None => head,
        }
    };

    let body = body
        .trim_end()
        .trim_end_matches([',', ';', ':', '-'])
        .trim_end();

    format!("{body}{ELLIPSIS}")
}

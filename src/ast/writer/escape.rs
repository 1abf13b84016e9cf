//! Backslash escapes for parsed text. pulldown-cmark hands out text with its
//! escapes and entities already resolved, so writing it back verbatim can turn
//! literal characters into live syntax.

/// Characters that open or close inline syntax wherever they appear.
const INLINE_SYNTAX: &[char] = &['\\', '`', '*', '_', '[', ']', '~'];

/// Characters that open a block when they are the first on a line.
const BLOCK_START: &[char] = &['#', '>', '-', '+', '='];

/// `&name;` or `&#123;` would be decoded as an entity.
fn starts_entity(rest: &str) -> bool {
    match rest.find(';') {
        Some(end) if end > 0 => rest[..end]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '#'),
        _ => false,
    }
}

/// `<` followed by one of these may start an HTML tag or an autolink.
fn starts_tag(rest: &str) -> bool {
    rest.starts_with(|c: char| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

/// Escape `text` so that it parses back to the same characters. `line_start`
/// is set when the text begins a line, where block markers such as `#`, `- `
/// and `1.` are recognized.
pub(crate) fn escape_text(text: &str, line_start: bool) -> String {
    let digits = if line_start {
        text.chars().take_while(char::is_ascii_digit).count()
    } else {
        0
    };
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        let escape = match ch {
            '&' => starts_entity(&text[i + 1..]),
            '<' => starts_tag(&text[i + 1..]),
            // Digits are single bytes, so the char count is also the byte offset.
            '.' | ')' => (1..=9).contains(&digits) && i == digits,
            c if INLINE_SYNTAX.contains(&c) => true,
            c => line_start && i == 0 && BLOCK_START.contains(&c),
        };
        if escape {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

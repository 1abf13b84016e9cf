use std::mem;

use pulldown_cmark::LinkType;

use crate::ast::Inline;
use crate::text::{Line, Region};

use super::escape::escape_text;

fn longest_backtick_run(s: &str) -> usize {
    let mut max_ticks = 0usize;
    let mut cur = 0usize;
    for ch in s.chars() {
        if ch == '`' {
            cur += 1;
            max_ticks = max_ticks.max(cur);
        } else {
            cur = 0;
        }
    }
    max_ticks
}

/// Fence for a code span or block: one backtick longer than any run inside,
/// and at least `min` long.
pub(crate) fn backtick_fence(content: &str, min: usize) -> String {
    "`".repeat(min.max(longest_backtick_run(content) + 1))
}

fn link_destination(dest: &str) -> String {
    if dest.contains([' ', '(', ')']) {
        format!("<{dest}>")
    } else {
        dest.to_string()
    }
}

fn link_title(title: &str) -> String {
    if title.is_empty() {
        String::new()
    } else {
        format!(" \"{}\"", title.replace('"', "\\\""))
    }
}

fn starts_inline_link(next: Option<&Inline>) -> bool {
    match next {
        Some(Inline::Link { link_type, .. }) => {
            !matches!(link_type, LinkType::Autolink | LinkType::Email)
        }
        _ => false,
    }
}

/// Accumulates inline output line by line.
#[derive(Default)]
struct InlineWriter {
    region: Region,
    current: Line,
}

impl InlineWriter {
    fn push_str(&mut self, s: &str) {
        let mut parts = s.split('\n').peekable();
        while let Some(part) = parts.next() {
            self.current.push(part);
            if parts.peek().is_some() {
                self.break_line();
            }
        }
    }

    fn break_line(&mut self) {
        let line = mem::take(&mut self.current);
        self.region.push_back_line(line);
    }

    fn write_all(&mut self, inlines: &[Inline]) {
        let mut rest = inlines;
        while let Some((first, tail)) = rest.split_first() {
            if !matches!(first, Inline::Text(_)) {
                self.write(first);
                rest = tail;
                continue;
            }
            // Adjacent text is escaped as one run so markers split across
            // events (`1986` then `. text`) are still seen.
            let run = rest.iter().take_while(|i| matches!(i, Inline::Text(_))).count();
            let mut text = String::new();
            for inl in &rest[..run] {
                if let Inline::Text(t) = inl {
                    text.push_str(t);
                }
            }
            rest = &rest[run..];
            self.write_text(&text, starts_inline_link(rest.first()));
        }
    }

    fn write_text(&mut self, text: &str, before_link: bool) {
        let mut escaped = escape_text(text, self.current.is_blank());
        // `!` right before `[` would turn the link into an image.
        if before_link && escaped.ends_with('!') {
            escaped.insert(escaped.len() - 1, '\\');
        }
        self.push_str(&escaped);
    }

    fn write(&mut self, inl: &Inline) {
        match inl {
            Inline::Text(t) => self.write_text(t, false),
            Inline::Html(t) => self.push_str(t),
            Inline::Code(code) => {
                let fence = backtick_fence(code, 1);
                let padded = code.starts_with('`')
                    || code.ends_with('`')
                    || (code.len() > 1
                        && code.starts_with(' ')
                        && code.ends_with(' ')
                        && !code.trim().is_empty());
                if padded {
                    self.push_str(&format!("{fence} {code} {fence}"));
                } else {
                    self.push_str(&format!("{fence}{code}{fence}"));
                }
            }
            Inline::SoftBreak => self.break_line(),
            Inline::HardBreak => {
                self.current.push("\\");
                self.break_line();
            }
            Inline::Emphasis(children) => self.wrap("*", children),
            Inline::Strong(children) => self.wrap("**", children),
            Inline::Strikethrough(children) => self.wrap("~~", children),
            Inline::Link {
                link_type: LinkType::Autolink | LinkType::Email,
                dest,
                ..
            } => self.push_str(&format!("<{dest}>")),
            Inline::Link {
                dest,
                title,
                children,
                ..
            } => {
                self.current.push("[");
                self.write_all(children);
                let target = format!("]({}{})", link_destination(dest), link_title(title));
                self.push_str(&target);
            }
            Inline::Image {
                dest,
                title,
                children,
                ..
            } => {
                self.current.push("![");
                self.write_all(children);
                let target = format!("]({}{})", link_destination(dest), link_title(title));
                self.push_str(&target);
            }
            Inline::TaskListMarker(done) => {
                self.current.push(if *done { "[x] " } else { "[ ] " });
            }
        }
    }

    fn wrap(&mut self, delimiter: &str, children: &[Inline]) {
        self.current.push(delimiter);
        self.write_all(children);
        self.current.push(delimiter);
    }

    fn finish(mut self) -> Region {
        self.break_line();
        self.region
    }
}

/// Render inline content. Soft breaks start a new line and hard breaks end
/// theirs with a backslash.
pub fn inlines_to_region(inlines: &[Inline]) -> Region {
    let mut writer = InlineWriter::default();
    writer.write_all(inlines);
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn breaks_split_lines() {
        let region = inlines_to_region(&[
            Inline::text("one"),
            Inline::SoftBreak,
            Inline::Strong(vec![Inline::text("two")]),
            Inline::HardBreak,
            Inline::text("three"),
        ]);
        assert_eq!(region.apply(), "one\n**two**\\\nthree");
    }

    #[test]
    fn code_spans_outgrow_inner_backticks() {
        let region = inlines_to_region(&[Inline::Code("a``b".into()), Inline::Code("`x".into())]);
        assert_eq!(region.apply(), "```a``b````` `x ``");
    }

    #[test]
    fn links_render_inline() {
        let region = inlines_to_region(&[
            Inline::Link {
                link_type: LinkType::Inline,
                dest: "https://example.com/a b".into(),
                title: "say \"hi\"".into(),
                children: vec![Inline::text("site")],
            },
            Inline::text(" "),
            Inline::Link {
                link_type: LinkType::Autolink,
                dest: "https://example.com".into(),
                title: String::new(),
                children: vec![Inline::text("https://example.com")],
            },
        ]);
        assert_eq!(
            region.apply(),
            "[site](<https://example.com/a b> \"say \\\"hi\\\"\") <https://example.com>"
        );
    }

    #[test]
    fn text_is_escaped_where_it_would_become_syntax() {
        let region = inlines_to_region(&[
            Inline::text("1986"),
            Inline::text(". a *b* & [c]"),
            Inline::SoftBreak,
            Inline::text("- <div>"),
            Inline::Emphasis(vec![Inline::text("# not a heading")]),
        ]);
        assert_eq!(region.apply(), "1986\\. a \\*b\\* & \\[c\\]\n\\- \\<div>*# not a heading*");
    }

    #[test]
    fn bang_before_link_stays_text() {
        let region = inlines_to_region(&[
            Inline::text("wow!"),
            Inline::Link {
                link_type: LinkType::Inline,
                dest: "x".into(),
                title: String::new(),
                children: vec![Inline::text("y")],
            },
        ]);
        assert_eq!(region.apply(), "wow\\![y](x)");
    }
}

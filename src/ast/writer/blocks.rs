use pulldown_cmark::{CodeBlockKind, HeadingLevel};

use crate::ast::{Block, Inline, Item};
use crate::context::RenderContext;
use crate::error::Result;
use crate::lists::{self, ListNode};
use crate::text::{Line, Region};

use super::inline::{backtick_fence, inlines_to_region};

fn render_heading(level: &HeadingLevel, content: &[Inline]) -> Region {
    let n = match level {
        HeadingLevel::H1 => 1usize,
        HeadingLevel::H2 => 2usize,
        HeadingLevel::H3 => 3usize,
        HeadingLevel::H4 => 4usize,
        HeadingLevel::H5 => 5usize,
        HeadingLevel::H6 => 6usize,
    };
    // Setext headings may span lines; ATX ones cannot.
    let mut text = inlines_to_region(content)
        .lines()
        .iter()
        .map(Line::apply)
        .collect::<Vec<_>>()
        .join(" ");
    // A trailing `#` would be read as the closing sequence.
    if text.ends_with('#') && !text.ends_with("\\#") {
        text.insert(text.len() - 1, '\\');
    }
    let mut l = Line::from_str(&"#".repeat(n));
    if !text.is_empty() {
        l.push(" ").push(text);
    }
    let mut r = Region::new();
    r.push_back_line(l);
    r
}

fn code_lines(content: &str) -> Option<&str> {
    let content = content.strip_suffix('\n').unwrap_or(content);
    (!content.is_empty()).then_some(content)
}

fn render_codeblock(kind: &CodeBlockKind<'static>, content: &str) -> Region {
    let mut r = Region::new();
    match kind {
        CodeBlockKind::Fenced(info) => {
            let fence = backtick_fence(content, 3);
            r.push_back_line(Line::from_str(&format!("{fence}{info}")));
            if let Some(body) = code_lines(content) {
                r.append(Region::from_str(body));
            }
            r.push_back_line(Line::from_str(&fence));
        }
        CodeBlockKind::Indented => {
            if let Some(body) = code_lines(content) {
                r.append(Region::from_str(body));
                r.indent_each_line(4);
            }
        }
    }
    r
}

fn render_blockquote(children: &[Block], context: &mut RenderContext) -> Result<Region> {
    let mut inner = blocks_to_region(children, false, context)?;
    if inner.is_empty() {
        inner.push_back_line(Line::new());
    }
    inner.prefix_each_line("> ", ">");
    Ok(inner)
}

/// Render the contents of one list item. Blocks inside an item of a tight list
/// follow each other directly; everywhere else they are separated by a blank
/// line.
fn render_item(item: &Item, tight: bool, context: &mut RenderContext) -> Result<String> {
    Ok(blocks_to_region(&item.children, tight, context)?.apply())
}

/// Render `blocks[index]`. Lists need the whole sibling slice to see which
/// lists directly precede them.
pub fn block_to_region(
    blocks: &[Block],
    index: usize,
    context: &mut RenderContext,
) -> Result<Region> {
    let Some(block) = blocks.get(index) else {
        return Ok(Region::new());
    };
    let region = match block {
        Block::Paragraph { children, .. } => inlines_to_region(children),
        Block::Heading { level, children } => render_heading(level, children),
        Block::CodeBlock { kind, content } => render_codeblock(kind, content),
        Block::HtmlBlock(html) => Region::from_str(html.trim_end_matches('\n')),
        Block::BlockQuote(children) => render_blockquote(children, context)?,
        Block::List(list) => {
            let tight = lists::is_tight(list);
            let Some(node) = ListNode::at(blocks, index) else {
                return Ok(Region::new());
            };
            let text =
                lists::render_list(node, context, |item, ctx| render_item(item, tight, ctx))?;
            Region::from_str(&text)
        }
        Block::Rule => Region::from_str("___"),
    };
    Ok(region)
}

/// Render a sequence of sibling blocks, separated by a blank line unless
/// `tight` is set.
pub fn blocks_to_region(
    blocks: &[Block],
    tight: bool,
    context: &mut RenderContext,
) -> Result<Region> {
    let mut out = Region::new();
    for index in 0..blocks.len() {
        if index > 0 && !tight {
            out.push_back_line(Line::new());
        }
        out.append(block_to_region(blocks, index, context)?);
    }
    Ok(out)
}

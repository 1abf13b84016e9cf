use crate::ast::block::{Block, Item, List};
use crate::ast::inline::Inline;
use pulldown_cmark::{Event, Tag};

/// What a frame gathers between its Start and End events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Collect {
    Inlines,
    Blocks,
    /// Literal text, for code and HTML blocks.
    Raw,
}

/// A stack frame used while matching Start/End pairs. The bottom frame has no
/// tag and collects the document's top-level blocks.
struct Frame<'a> {
    tag: Option<Tag<'a>>,
    collect: Collect,
    inlines: Vec<Inline>,
    blocks: Vec<Block>,
    items: Vec<Item>,
    raw: String,
}

impl<'a> Frame<'a> {
    fn new(tag: Option<Tag<'a>>) -> Self {
        let collect = match &tag {
            Some(
                Tag::Paragraph
                | Tag::Heading { .. }
                | Tag::Emphasis
                | Tag::Strong
                | Tag::Strikethrough
                | Tag::Subscript
                | Tag::Superscript
                | Tag::Link { .. }
                | Tag::Image { .. }
                | Tag::TableCell,
            ) => Collect::Inlines,
            Some(Tag::CodeBlock(_) | Tag::HtmlBlock | Tag::MetadataBlock(_)) => Collect::Raw,
            _ => Collect::Blocks,
        };
        Frame {
            tag,
            collect,
            inlines: Vec::new(),
            blocks: Vec::new(),
            items: Vec::new(),
            raw: String::new(),
        }
    }

    /// Add an inline node. A block container receiving inline content directly
    /// (the text of a tight list item) gets it wrapped in a hidden paragraph,
    /// extending the trailing one so a run of inlines stays together.
    fn push_inline(&mut self, inline: Inline) {
        match self.collect {
            Collect::Inlines => self.inlines.push(inline),
            Collect::Blocks => match self.blocks.last_mut() {
                Some(Block::Paragraph {
                    hidden: true,
                    children,
                }) => children.push(inline),
                _ => self.blocks.push(Block::hidden_paragraph(vec![inline])),
            },
            Collect::Raw => {
                if let Inline::Text(t) = inline {
                    self.raw.push_str(&t);
                }
            }
        }
    }

    fn push_block(&mut self, block: Block) {
        match self.collect {
            Collect::Blocks => self.blocks.push(block),
            // A block can only land in an inline container through an
            // extension we don't parse; keep its paragraph text if it has any.
            Collect::Inlines => {
                if let Block::Paragraph { children, .. } = block {
                    self.inlines.extend(children);
                }
            }
            Collect::Raw => {}
        }
    }
}

/// What a closed frame turns into.
enum Node {
    Block(Block),
    Item(Item),
    Inline(Inline),
    /// Content of a construct without its own node, spliced into the parent.
    Splice(Vec<Block>, Vec<Inline>),
}

fn close_frame(frame: Frame<'_>) -> Node {
    let Some(tag) = frame.tag else {
        return Node::Splice(frame.blocks, frame.inlines);
    };
    match tag {
        Tag::Paragraph => Node::Block(Block::paragraph(frame.inlines)),
        Tag::Heading { level, .. } => Node::Block(Block::Heading {
            level,
            children: frame.inlines,
        }),
        Tag::BlockQuote(_) => Node::Block(Block::BlockQuote(frame.blocks)),
        Tag::CodeBlock(kind) => Node::Block(Block::CodeBlock {
            kind: kind.into_static(),
            content: frame.raw,
        }),
        Tag::HtmlBlock => Node::Block(Block::HtmlBlock(frame.raw)),
        Tag::List(Some(start)) => Node::Block(Block::List(List::ordered(Some(start), frame.items))),
        Tag::List(None) => Node::Block(Block::List(List::bullet(frame.items))),
        Tag::Item => Node::Item(Item::new(frame.blocks)),
        Tag::Emphasis => Node::Inline(Inline::Emphasis(frame.inlines)),
        Tag::Strong => Node::Inline(Inline::Strong(frame.inlines)),
        Tag::Strikethrough => Node::Inline(Inline::Strikethrough(frame.inlines)),
        Tag::Link {
            link_type,
            dest_url,
            title,
            ..
        } => Node::Inline(Inline::Link {
            link_type,
            dest: dest_url.to_string(),
            title: title.to_string(),
            children: frame.inlines,
        }),
        Tag::Image {
            link_type,
            dest_url,
            title,
            ..
        } => Node::Inline(Inline::Image {
            link_type,
            dest: dest_url.to_string(),
            title: title.to_string(),
            children: frame.inlines,
        }),
        // Front matter is not part of the rendered document.
        Tag::MetadataBlock(_) => Node::Splice(Vec::new(), Vec::new()),
        _ => Node::Splice(frame.blocks, frame.inlines),
    }
}

/// Convert a pulldown-cmark `Event` slice into a vector of `Block` AST nodes.
///
/// Paragraph tags are absent from the items of a tight list, so inline content
/// met directly inside a block container becomes a paragraph with `hidden` set.
/// That flag is what later decides a list's tightness.
pub fn parse_events_to_blocks(events: &[Event<'_>]) -> Vec<Block> {
    let mut stack: Vec<Frame> = vec![Frame::new(None)];

    for ev in events {
        match ev {
            Event::Start(tag) => stack.push(Frame::new(Some(tag.clone()))),
            Event::End(_) => {
                // The root frame is never closed by an event.
                if stack.len() < 2 {
                    continue;
                }
                let Some(frame) = stack.pop() else {
                    continue;
                };
                let node = close_frame(frame);
                let Some(parent) = stack.last_mut() else {
                    continue;
                };
                match node {
                    Node::Block(b) => parent.push_block(b),
                    Node::Item(item) => parent.items.push(item),
                    Node::Inline(inl) => parent.push_inline(inl),
                    Node::Splice(blocks, inlines) => {
                        for b in blocks {
                            parent.push_block(b);
                        }
                        for inl in inlines {
                            parent.push_inline(inl);
                        }
                    }
                }
            }
            other => {
                let Some(top) = stack.last_mut() else {
                    continue;
                };
                match other {
                    Event::Text(t) => top.push_inline(Inline::Text(t.to_string())),
                    Event::Code(t) => top.push_inline(Inline::Code(t.to_string())),
                    Event::Html(t) | Event::InlineHtml(t) => {
                        if top.collect == Collect::Raw {
                            top.raw.push_str(t);
                        } else {
                            top.push_inline(Inline::Html(t.to_string()));
                        }
                    }
                    Event::SoftBreak => top.push_inline(Inline::SoftBreak),
                    Event::HardBreak => top.push_inline(Inline::HardBreak),
                    Event::Rule => top.push_block(Block::Rule),
                    Event::TaskListMarker(done) => top.push_inline(Inline::TaskListMarker(*done)),
                    Event::FootnoteReference(label) => {
                        top.push_inline(Inline::Text(format!("[^{label}]")))
                    }
                    Event::InlineMath(t) => top.push_inline(Inline::Text(format!("${t}$"))),
                    Event::DisplayMath(t) => top.push_inline(Inline::Text(format!("$${t}$$"))),
                    Event::Start(_) | Event::End(_) => {}
                }
            }
        }
    }

    // Unbalanced input leaves frames open; fold them into their parents.
    while stack.len() > 1 {
        let Some(frame) = stack.pop() else { break };
        let node = close_frame(frame);
        if let Some(parent) = stack.last_mut() {
            match node {
                Node::Block(b) => parent.push_block(b),
                Node::Item(item) => parent.items.push(item),
                Node::Inline(inl) => parent.push_inline(inl),
                Node::Splice(blocks, _) => {
                    for b in blocks {
                        parent.push_block(b);
                    }
                }
            }
        }
    }

    let blocks = stack.pop().map(|root| root.blocks).unwrap_or_default();
    tracing::trace!(blocks = blocks.len(), "parsed events into blocks");
    blocks
}

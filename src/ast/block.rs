use crate::ast::inline::Inline;
use pulldown_cmark::{CodeBlockKind, HeadingLevel};

/// Block level AST nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Paragraph {
        /// Set when the paragraph had no paragraph markup of its own, which
        /// happens for the text of tight list items.
        hidden: bool,
        children: Vec<Inline>,
    },
    Heading {
        level: HeadingLevel,
        children: Vec<Inline>,
    },
    BlockQuote(Vec<Block>),
    CodeBlock {
        kind: CodeBlockKind<'static>,
        content: String,
    },
    HtmlBlock(String),
    List(List),
    Rule,
}

impl Block {
    pub fn paragraph(children: Vec<Inline>) -> Self {
        Block::Paragraph {
            hidden: false,
            children,
        }
    }

    pub fn hidden_paragraph(children: Vec<Inline>) -> Self {
        Block::Paragraph {
            hidden: true,
            children,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Block::List(list) => Some(list),
            _ => None,
        }
    }
}

/// Which family of markers a list uses. Ordered lists carry their start
/// number, so a bullet list can never claim one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListKind {
    Bullet,
    Ordered { start: Option<u64> },
}

impl ListKind {
    /// Same family, regardless of start number.
    pub fn same_family(&self, other: &ListKind) -> bool {
        matches!(
            (self, other),
            (ListKind::Bullet, ListKind::Bullet)
                | (ListKind::Ordered { .. }, ListKind::Ordered { .. })
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<Item>,
}

impl List {
    pub fn bullet(items: Vec<Item>) -> Self {
        List {
            kind: ListKind::Bullet,
            items,
        }
    }

    pub fn ordered(start: Option<u64>, items: Vec<Item>) -> Self {
        List {
            kind: ListKind::Ordered { start },
            items,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Item {
    pub children: Vec<Block>,
}

impl Item {
    pub fn new(children: Vec<Block>) -> Self {
        Item { children }
    }
}

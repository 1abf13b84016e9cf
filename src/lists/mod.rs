//! Rendering of bullet and ordered lists.
//!
//! A list is rendered in four steps: its position among adjacent sibling
//! lists picks the marker ([`alternation`]), ordered lists turn that marker
//! into per-item numbers ([`numbering`]), the items' paragraphs decide the
//! spacing ([`tightness`]), and [`layout`] puts markers, item bodies, and
//! indentation together.

pub mod alternation;
pub mod layout;
pub mod numbering;
pub mod tightness;

use crate::ast::{Block, Item, List, ListKind};
use crate::context::RenderContext;
use crate::error::Result;

pub use alternation::{resolve_marker, run_position};
pub use layout::{Markers, render};
pub use numbering::compute_markers;
pub use tightness::is_tight;

/// A list together with its place among its siblings.
///
/// Sibling navigation goes through the parent's child slice, so the tree
/// itself needs no back links.
#[derive(Clone, Copy, Debug)]
pub struct ListNode<'a> {
    siblings: &'a [Block],
    index: usize,
    list: &'a List,
}

impl<'a> ListNode<'a> {
    /// The list at `siblings[index]`, or `None` if that block is not a list.
    pub fn at(siblings: &'a [Block], index: usize) -> Option<Self> {
        let list = siblings.get(index)?.as_list()?;
        Some(ListNode {
            siblings,
            index,
            list,
        })
    }

    pub fn list(&self) -> &'a List {
        self.list
    }

    pub fn kind(&self) -> ListKind {
        self.list.kind
    }

    pub fn previous_sibling(&self) -> Option<&'a Block> {
        let index = self.index.checked_sub(1)?;
        self.siblings.get(index)
    }

    /// The directly preceding sibling, if it is a list.
    pub fn previous(&self) -> Option<ListNode<'a>> {
        let list = self.previous_sibling()?.as_list()?;
        Some(ListNode {
            siblings: self.siblings,
            index: self.index - 1,
            list,
        })
    }
}

/// Render one list with the markers the context's configuration calls for.
///
/// `render_item` produces the text of an item's contents without any marker
/// or indentation; it is called once per item, in order, with the context
/// indented by the list's marker width.
pub fn render_list<F>(
    node: ListNode<'_>,
    context: &mut RenderContext,
    render_item: F,
) -> Result<String>
where
    F: FnMut(&Item, &mut RenderContext) -> Result<String>,
{
    let config = *context.config();
    let list = node.list();
    let markers = match list.kind {
        ListKind::Bullet => {
            let bullet = resolve_marker(&node, config.bullet, config.bullet.alternate());
            Markers::Repeated(bullet.to_string())
        }
        ListKind::Ordered { .. } => {
            let suffix = resolve_marker(
                &node,
                config.ordered_marker,
                config.ordered_marker.alternate(),
            );
            Markers::PerItem(compute_markers(list, suffix, config.number))
        }
    };
    tracing::debug!(
        kind = ?list.kind,
        items = list.items.len(),
        run_position = run_position(&node),
        marker = markers.first(),
        indent = context.indent(),
        "rendering list"
    );
    render(list, &markers, context, render_item)
}

use crate::ast::{Item, List};
use crate::context::RenderContext;
use crate::text::{Fragment, Region};

use super::tightness::item_separator;

/// Markers for the items of one list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Markers {
    /// One marker for every item, as bullet lists use.
    Repeated(String),
    /// One marker per item, in item order.
    PerItem(Vec<String>),
}

impl Markers {
    pub fn first(&self) -> &str {
        match self {
            Markers::Repeated(m) => m,
            Markers::PerItem(ms) => ms.first().map_or("", String::as_str),
        }
    }

    fn for_item(&self, index: usize) -> &str {
        match self {
            Markers::Repeated(m) => m,
            Markers::PerItem(ms) => &ms[index],
        }
    }
}

/// Lay out a list's items behind their markers.
///
/// The indentation for continuation lines is the first marker's width plus
/// one space and is used for every item, even if a later marker is wider.
/// Items are joined by a line break when the list is tight and by a blank
/// line otherwise.
///
/// An error from `render_item` stops the layout and is returned as is.
///
/// # Panics
///
/// If per-item markers don't match the number of items.
pub fn render<F, E>(
    list: &List,
    markers: &Markers,
    context: &mut RenderContext,
    mut render_item: F,
) -> Result<String, E>
where
    F: FnMut(&Item, &mut RenderContext) -> Result<String, E>,
{
    if let Markers::PerItem(ms) = markers {
        assert_eq!(ms.len(), list.items.len(), "one marker per list item");
    }
    let separator = item_separator(list);
    let indent_width = Fragment::from(markers.first()).len() + 1;

    let mut scoped = context.indented(indent_width);
    let mut rendered = Vec::with_capacity(list.items.len());
    for (index, item) in list.items.iter().enumerate() {
        let marker = markers.for_item(index);
        let body = render_item(item, &mut *scoped)?;
        let mut region = Region::from_str(&body);
        region.prefix_first_then_indent_rest(marker, indent_width);
        tracing::trace!(index, marker, lines = region.lines().len(), "list item");
        rendered.push(region.apply());
    }
    Ok(rendered.join(separator))
}

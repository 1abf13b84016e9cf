use crate::ast::{Block, List};

/// A list is tight unless one of its items holds a paragraph that was written
/// as a real paragraph. Only the items' own children are inspected; nested
/// lists decide their spacing for themselves.
pub fn is_tight(list: &List) -> bool {
    list.items
        .iter()
        .flat_map(|item| &item.children)
        .all(|block| !matches!(block, Block::Paragraph { hidden: false, .. }))
}

/// Text placed between rendered items.
pub fn item_separator(list: &List) -> &'static str {
    if is_tight(list) { "\n" } else { "\n\n" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Inline, Item};

    fn hidden(text: &str) -> Block {
        Block::hidden_paragraph(vec![Inline::text(text)])
    }

    fn shown(text: &str) -> Block {
        Block::paragraph(vec![Inline::text(text)])
    }

    #[test]
    fn all_hidden_paragraphs_is_tight() {
        let list = List::bullet(vec![Item::new(vec![hidden("a")]), Item::new(vec![hidden("b")])]);
        assert!(is_tight(&list));
        assert_eq!(item_separator(&list), "\n");
    }

    #[test]
    fn one_visible_paragraph_makes_it_loose() {
        let list = List::bullet(vec![
            Item::new(vec![hidden("a")]),
            Item::new(vec![hidden("b"), shown("c")]),
        ]);
        assert!(!is_tight(&list));
        assert_eq!(item_separator(&list), "\n\n");
    }

    #[test]
    fn nested_loose_list_does_not_loosen_parent() {
        let nested = List::bullet(vec![Item::new(vec![shown("x")]), Item::new(vec![shown("y")])]);
        let list = List::ordered(
            Some(1),
            vec![Item::new(vec![hidden("a"), Block::List(nested)])],
        );
        assert!(is_tight(&list));
    }

    #[test]
    fn items_without_paragraphs_are_tight() {
        let list = List::bullet(vec![Item::default(), Item::new(vec![Block::Rule])]);
        assert!(is_tight(&list));
    }
}

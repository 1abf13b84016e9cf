use cmark_lists::{Bullet, Config, OrderedMarker, format_markdown};
use pretty_assertions::assert_eq;

fn format(input: &str, config: Config) -> String {
    format_markdown(input, &config).unwrap()
}

fn bullet(b: Bullet) -> Config {
    Config::default().with_bullet(b)
}

fn ordered(m: OrderedMarker) -> Config {
    Config::default().with_ordered_marker(m)
}

mod default_bullet {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_list() {
        assert_eq!(format("* item 1\n* item 2\n", Config::default()), "- item 1\n- item 2\n");
    }

    #[test]
    fn preserves_content() {
        assert_eq!(format("* hello world\n", Config::default()), "- hello world\n");
    }

    #[test]
    fn consecutive_lists_alternate() {
        assert_eq!(format("- a\n\n* b\n", Config::default()), "- a\n\n* b\n");
    }

    #[test]
    fn source_markers_do_not_matter() {
        assert_eq!(format("* a\n\n- b\n", Config::default()), "- a\n\n* b\n");
    }
}

mod configured_bullet {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dash_converts_from_plus() {
        assert_eq!(format("+ item 1\n+ item 2\n", bullet(Bullet::Dash)), "- item 1\n- item 2\n");
    }

    #[test]
    fn star_converts_from_dash_and_plus() {
        assert_eq!(format("- item 1\n- item 2\n", bullet(Bullet::Star)), "* item 1\n* item 2\n");
        assert_eq!(format("+ item 1\n+ item 2\n", bullet(Bullet::Star)), "* item 1\n* item 2\n");
    }

    #[test]
    fn plus_converts_from_dash_and_star() {
        assert_eq!(format("- item 1\n- item 2\n", bullet(Bullet::Plus)), "+ item 1\n+ item 2\n");
        assert_eq!(format("* item 1\n* item 2\n", bullet(Bullet::Plus)), "+ item 1\n+ item 2\n");
    }

    #[test]
    fn same_bullet_is_left_alone() {
        assert_eq!(format("* item 1\n* item 2\n", bullet(Bullet::Star)), "* item 1\n* item 2\n");
    }
}

mod nesting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_list() {
        assert_eq!(
            format("- item 1\n  - nested 1\n  - nested 2\n- item 2\n", bullet(Bullet::Star)),
            "* item 1\n  * nested 1\n  * nested 2\n* item 2\n"
        );
    }

    #[test]
    fn deeply_nested() {
        assert_eq!(format("- a\n  - b\n    - c\n", bullet(Bullet::Plus)), "+ a\n  + b\n    + c\n");
    }

    #[test]
    fn nested_ordered_list() {
        assert_eq!(
            format(
                "1. item 1\n   1. nested 1\n   2. nested 2\n2. item 2\n",
                ordered(OrderedMarker::Paren)
            ),
            "1) item 1\n   1) nested 1\n   1) nested 2\n1) item 2\n"
        );
    }

    #[test]
    fn nested_indent_follows_parent_marker_width() {
        assert_eq!(
            format(
                "10. a\n    - b\n11. c\n",
                Config::default().with_number(true)
            ),
            "10. a\n    - b\n11. c\n"
        );
    }

    #[test]
    fn continuation_lines_are_indented_and_blank_lines_stay_empty() {
        assert_eq!(
            format("- first\n  line\n\n  second para\n- next\n", Config::default()),
            "- first\n  line\n\n  second para\n\n- next\n"
        );
    }
}

mod consecutive_lists {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn star_alternates_with_dash() {
        assert_eq!(format("* a\n\n- b\n", bullet(Bullet::Star)), "* a\n\n- b\n");
    }

    #[test]
    fn plus_alternates_with_dash() {
        assert_eq!(format("+ a\n\n- b\n", bullet(Bullet::Plus)), "+ a\n\n- b\n");
    }

    #[test]
    fn three_consecutive_lists() {
        assert_eq!(format("* a\n\n- b\n\n* c\n", bullet(Bullet::Star)), "* a\n\n- b\n\n* c\n");
    }

    #[test]
    fn adjacent_ordered_lists_alternate_suffix() {
        assert_eq!(format("1. a\n\n1) b\n", Config::default()), "1. a\n\n1) b\n");
        assert_eq!(format("1. a\n\n1) b\n", ordered(OrderedMarker::Paren)), "1) a\n\n1. b\n");
    }

    #[test]
    fn ordered_lists_separated_by_content_keep_primary_marker() {
        let input = "1. a\n\nSome text.\n\n1. b\n";
        assert_eq!(format(input, ordered(OrderedMarker::Period)), input);
        assert_eq!(
            format(input, ordered(OrderedMarker::Paren)),
            "1) a\n\nSome text.\n\n1) b\n"
        );
    }

    #[test]
    fn bullet_then_ordered_is_not_a_run() {
        assert_eq!(format("- a\n\n1. b\n\n* c\n", Config::default()), "- a\n\n1. b\n\n- c\n");
    }
}

mod spacing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tight_list() {
        assert_eq!(
            format("- item 1\n- item 2\n- item 3\n", bullet(Bullet::Star)),
            "* item 1\n* item 2\n* item 3\n"
        );
    }

    #[test]
    fn loose_list() {
        assert_eq!(
            format("- item 1\n\n- item 2\n\n- item 3\n", bullet(Bullet::Star)),
            "* item 1\n\n* item 2\n\n* item 3\n"
        );
    }

    #[test]
    fn one_blank_line_loosens_the_whole_list() {
        assert_eq!(
            format("- item 1\n- item 2\n\n- item 3\n", Config::default()),
            "- item 1\n\n- item 2\n\n- item 3\n"
        );
    }

    #[test]
    fn tight_ordered_list() {
        assert_eq!(
            format("1. item 1\n2. item 2\n3. item 3\n", ordered(OrderedMarker::Paren)),
            "1) item 1\n1) item 2\n1) item 3\n"
        );
    }

    #[test]
    fn loose_ordered_list() {
        assert_eq!(
            format("1. item 1\n\n2. item 2\n\n3. item 3\n", ordered(OrderedMarker::Paren)),
            "1) item 1\n\n1) item 2\n\n1) item 3\n"
        );
    }
}

mod ordered_markers {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_marker_converts_from_paren() {
        assert_eq!(format("1) item 1\n2) item 2\n", Config::default()), "1. item 1\n1. item 2\n");
        assert_eq!(format("1) hello world\n", Config::default()), "1. hello world\n");
    }

    #[test]
    fn paren_converts_from_dot() {
        assert_eq!(
            format("1. item 1\n2. item 2\n", ordered(OrderedMarker::Paren)),
            "1) item 1\n1) item 2\n"
        );
    }

    #[test]
    fn start_number_is_kept() {
        assert_eq!(format("3) a\n4) b\n", Config::default()), "3. a\n1. b\n");
        assert_eq!(format("10. a\n11. b\n", Config::default()), "10. a\n01. b\n");
    }
}

mod numbering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn consecutive_numbering() {
        assert_eq!(
            format("1. item 1\n2. item 2\n3. item 3\n", Config::default().with_number(true)),
            "1. item 1\n2. item 2\n3. item 3\n"
        );
    }

    #[test]
    fn consecutive_numbering_with_paren_marker() {
        let config = ordered(OrderedMarker::Paren).with_number(true);
        assert_eq!(
            format("1. item 1\n1. item 2\n1. item 3\n", config),
            "1) item 1\n2) item 2\n3) item 3\n"
        );
    }

    #[test]
    fn consecutive_numbers_are_zero_padded() {
        let input = "8. a\n9. b\n10. c\n";
        assert_eq!(
            format(input, Config::default().with_number(true)),
            "08. a\n09. b\n10. c\n"
        );
    }
}

mod escapes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escaped_markers_stay_text() {
        assert_eq!(format("\\* not a list\n", Config::default()), "\\* not a list\n");
        assert_eq!(format("1\\. not a list\n", Config::default()), "1\\. not a list\n");
    }

    #[test]
    fn escaped_number_inside_an_item_stays_text() {
        assert_eq!(
            format("- 1986\\. A great year\n", bullet(Bullet::Star)),
            "* 1986\\. A great year\n"
        );
    }

    #[test]
    fn entities_do_not_become_html() {
        assert_eq!(format("&lt;div&gt;\n", Config::default()), "\\<div>\n");
        assert_eq!(format("&amp;copy;\n", Config::default()), "\\&copy;\n");
    }
}

#[test]
fn non_list_content_passes_through() {
    let input = "# Title\n\nSome *text* with `code`.\n\n> quoted\n\n```rust\nfn main() {}\n```\n";
    assert_eq!(format(input, Config::default()), input);
}

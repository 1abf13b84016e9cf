use pulldown_cmark::LinkType;

/// Inline level AST nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Inline {
    Text(String),
    Code(String),
    Html(String),
    SoftBreak,
    HardBreak,
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link {
        link_type: LinkType,
        dest: String,
        title: String,
        children: Vec<Inline>,
    },
    Image {
        link_type: LinkType,
        dest: String,
        title: String,
        children: Vec<Inline>,
    },
    TaskListMarker(bool),
}

impl Inline {
    pub fn text(s: &str) -> Self {
        Inline::Text(s.to_string())
    }
}

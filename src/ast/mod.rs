pub mod block;
pub mod inline;
pub mod parse;
pub mod writer;

pub use block::{Block, Item, List, ListKind};
pub use inline::Inline;
pub use parse::parse_events_to_blocks;
pub use writer::blocks_to_markdown;

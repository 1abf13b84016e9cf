//! Canonical rendering of Markdown lists.
//!
//! Bullet lists get a configurable bullet (`-`, `*` or `+`) and ordered lists
//! a configurable suffix (`.` or `)`). Lists that directly follow a list of the
//! same kind alternate with a second marker so they stay separate lists when
//! the output is parsed again. Ordered items are either all numbered `1` after
//! the first or numbered consecutively with zero padding.
//!
//! ```rust
//! use cmark_lists::{Bullet, Config, format_markdown};
//!
//! let input = "* one\n* two\n\n+ three\n";
//! let config = Config::default().with_bullet(Bullet::Plus);
//!
//! let output = format_markdown(input, &config)?;
//! assert_eq!(output, "+ one\n+ two\n\n- three\n");
//! # Ok::<(), cmark_lists::Error>(())
//! ```

pub mod ast;
pub mod config;
pub mod context;
pub mod error;
pub mod lists;
pub mod text;

pub use config::{Bullet, Config, OrderedMarker};
pub use context::{IndentGuard, RenderContext};
pub use error::{Error, Result};
pub use text::{Fragment, Line, Region};

use pulldown_cmark::{Event, Options, Parser};

/// Parser extensions whose output the writer can render back.
pub fn parser_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Parse `input` and render it back with lists formatted per `config`.
pub fn format_markdown(input: &str, config: &Config) -> Result<String> {
    let events: Vec<Event> = Parser::new_ext(input, parser_options()).collect();
    let blocks = ast::parse_events_to_blocks(&events);
    tracing::debug!(events = events.len(), blocks = blocks.len(), ?config, "formatting");
    let mut context = RenderContext::new(*config);
    ast::blocks_to_markdown(&blocks, &mut context)
}

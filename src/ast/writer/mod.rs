pub mod blocks;
mod escape;
pub mod inline;

use crate::ast::Block;
use crate::context::RenderContext;
use crate::error::Result;

pub use blocks::{block_to_region, blocks_to_region};
pub use inline::inlines_to_region;

/// Render a document's top-level blocks. Non-empty output ends with a newline.
pub fn blocks_to_markdown(blocks: &[Block], context: &mut RenderContext) -> Result<String> {
    if blocks.is_empty() {
        return Ok(String::new());
    }
    let mut out = blocks_to_region(blocks, false, context)?.apply();
    out.push('\n');
    Ok(out)
}

//! Per-render mutable state.
//!
//! [`RenderContext`] carries the configuration and the current indentation.
//! Indentation only ever grows through [`RenderContext::indented`], which
//! returns an [`IndentGuard`]; dropping the guard restores the previous
//! indentation, so an early return or a `?` inside a nested render cannot
//! leak indentation into the caller.

use std::ops::{Deref, DerefMut};

use crate::config::Config;

/// State threaded through one render call.
#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    config: Config,
    indent: usize,
    depth: usize,
}

impl RenderContext {
    pub fn new(config: Config) -> Self {
        RenderContext {
            config,
            indent: 0,
            depth: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Total columns of indentation applied by the enclosing lists.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Number of enclosing indented scopes.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Increase indentation by `width` until the returned guard is dropped.
    pub fn indented(&mut self, width: usize) -> IndentGuard<'_> {
        self.indent += width;
        self.depth += 1;
        IndentGuard {
            context: self,
            width,
        }
    }
}

/// RAII guard for one level of indentation.
///
/// Derefs to the [`RenderContext`], so nested renders take it wherever a
/// context is expected. The indentation is removed on drop, including during
/// unwinding.
pub struct IndentGuard<'ctx> {
    context: &'ctx mut RenderContext,
    width: usize,
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.context.indent -= self.width;
        self.context.depth -= 1;
    }
}

impl Deref for IndentGuard<'_> {
    type Target = RenderContext;

    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.context
    }
}

use std::sync::Arc;

/// The smallest unit of output text. Markers and indentation runs are shared
/// between the lines they are prepended to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fragment(Arc<str>);

impl Fragment {
    /// A run of `n` spaces.
    pub fn spaces(n: usize) -> Self {
        Fragment::from(" ".repeat(n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, which is what list indentation is measured in.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment(Arc::from(s))
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment(Arc::from(s))
    }
}

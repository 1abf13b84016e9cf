use super::Fragment;

/// A Line is a sequence of Fragments, joined only when `apply()` is called.
#[derive(Clone, Debug, Default)]
pub struct Line {
    fragments: Vec<Fragment>,
}

impl Line {
    pub fn new() -> Self {
        Line {
            fragments: Vec::new(),
        }
    }

    pub fn from_str(s: &str) -> Self {
        let mut line = Line::new();
        if !s.is_empty() {
            line.fragments.push(Fragment::from(s));
        }
        line
    }

    pub fn push<F: Into<Fragment>>(&mut self, f: F) -> &mut Self {
        let f = f.into();
        if !f.is_empty() {
            self.fragments.push(f);
        }
        self
    }

    pub fn prepend<F: Into<Fragment>>(&mut self, f: F) -> &mut Self {
        self.fragments.insert(0, f.into());
        self
    }

    /// True when the line renders to the empty string.
    pub fn is_blank(&self) -> bool {
        self.fragments.iter().all(Fragment::is_empty)
    }

    pub fn apply(&self) -> String {
        let mut out = String::new();
        for frag in &self.fragments {
            out.push_str(frag.as_str());
        }
        out
    }
}

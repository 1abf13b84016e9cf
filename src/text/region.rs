use super::{Fragment, Line};

/// A Region is a block of lines. Operations mutate in place and return
/// `&mut Self` so they can be chained.
#[derive(Clone, Debug, Default)]
pub struct Region {
    lines: Vec<Line>,
}

impl Region {
    pub fn new() -> Self {
        Region { lines: Vec::new() }
    }

    /// Split a string on `\n` into lines. The empty string yields one empty
    /// line, so a rendered-but-empty body still occupies a line.
    pub fn from_str(s: &str) -> Self {
        Region {
            lines: s.split('\n').map(Line::from_str).collect(),
        }
    }

    pub fn push_back_line(&mut self, line: Line) -> &mut Self {
        self.lines.push(line);
        self
    }

    /// Append every line of `other`.
    pub fn append(&mut self, other: Region) -> &mut Self {
        self.lines.extend(other.lines);
        self
    }

    /// Prefix every line: non-blank lines get `prefix`, blank ones `blank_prefix`.
    pub fn prefix_each_line(&mut self, prefix: &str, blank_prefix: &str) -> &mut Self {
        let p = Fragment::from(prefix);
        let bp = Fragment::from(blank_prefix);
        for line in &mut self.lines {
            if line.is_blank() {
                line.prepend(bp.clone());
            } else {
                line.prepend(p.clone());
            }
        }
        self
    }

    /// Indent every non-blank line by `n` spaces.
    pub fn indent_each_line(&mut self, n: usize) -> &mut Self {
        if n == 0 {
            return self;
        }
        let sp = Fragment::spaces(n);
        for line in self.lines.iter_mut().filter(|l| !l.is_blank()) {
            line.prepend(sp.clone());
        }
        self
    }

    /// Put `marker` in front of the first line and indent the remaining
    /// non-blank lines by `indent` spaces. The marker is separated from the
    /// first line's text by a single space, except when that line is blank,
    /// in which case the marker stands alone.
    pub fn prefix_first_then_indent_rest<F: Into<Fragment>>(
        &mut self,
        marker: F,
        indent: usize,
    ) -> &mut Self {
        let marker = marker.into();
        match self.lines.first_mut() {
            Some(first) if !first.is_blank() => {
                first.prepend(" ");
                first.prepend(marker);
            }
            Some(first) => {
                *first = Line::new();
                first.push(marker);
            }
            None => {
                let mut line = Line::new();
                line.push(marker);
                self.lines.push(line);
            }
        }
        let sp = Fragment::spaces(indent);
        for line in self.lines.iter_mut().skip(1).filter(|l| !l.is_blank()) {
            line.prepend(sp.clone());
        }
        self
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Join lines with `\n`. This is the only place the final string is built.
    pub fn apply(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line.apply());
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

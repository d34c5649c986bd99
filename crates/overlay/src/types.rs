use crate::columns::Column;
use crate::error::Result;
use std::path::Path;

/// A loaded source text, as seen by the overlay builder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDocument {
    line_count: usize,
    focus_line: u32,
    text: Option<String>,
}

impl SourceDocument {
    /// Describe a document by its shape only
    #[must_use]
    pub const fn new(line_count: usize, focus_line: u32) -> Self {
        Self {
            line_count,
            focus_line,
            text: None,
        }
    }

    /// Build a document from text, counting lines the way an editor does:
    /// `"a\nb\n"` has three lines, the last one empty.
    pub fn from_text(text: impl Into<String>, focus_line: u32) -> Self {
        let text = text.into();
        Self {
            line_count: count_lines(&text),
            focus_line,
            text: Some(text),
        }
    }

    /// Read a document from disk
    pub fn from_path(path: impl AsRef<Path>, focus_line: u32) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(text, focus_line))
    }

    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    /// 1-based line to bring into view; 0 means no navigation
    #[must_use]
    pub const fn focus_line(&self) -> u32 {
        self.focus_line
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Lines of the text, without terminators. Empty when built without text.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.text.as_deref().map(split_lines).unwrap_or_default()
    }
}

fn count_lines(text: &str) -> usize {
    split_lines(text).len()
}

/// Split on `\r\n`, `\n` and lone `\r`, keeping a trailing empty line
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' => {
                lines.push(&text[start..pos]);
                start = pos + 1;
            }
            b'\r' => {
                lines.push(&text[start..pos]);
                if bytes.get(pos + 1) == Some(&b'\n') {
                    pos += 1;
                }
                start = pos + 1;
            }
            _ => {}
        }
        pos += 1;
    }
    lines.push(&text[start..]);
    lines
}

/// Profiling sample attributed to a single source line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetric {
    /// 1-based line number
    pub line_number: u32,

    /// Inclusive cost as a share of the reference total
    pub total_percent: f64,

    /// Inclusive cost, callees collapsed onto this line
    pub total: f64,

    /// Exclusive cost as a share of the reference total
    pub self_percent: f64,

    /// Exclusive cost
    pub self_cost: f64,
}

impl LineMetric {
    #[must_use]
    pub const fn new(
        line_number: u32,
        total_percent: f64,
        total: f64,
        self_percent: f64,
        self_cost: f64,
    ) -> Self {
        Self {
            line_number,
            total_percent,
            total,
            self_percent,
            self_cost,
        }
    }

    /// Raw value shown in `column`
    #[must_use]
    pub const fn value(&self, column: Column) -> f64 {
        match column {
            Column::TotalPercent => self.total_percent,
            Column::Total => self.total,
            Column::SelfPercent => self.self_percent,
            Column::SelfCost => self.self_cost,
        }
    }

    /// 0-based index of the line this metric belongs to
    #[must_use]
    pub fn line_index(&self) -> Option<usize> {
        usize::try_from(self.line_number).ok()?.checked_sub(1)
    }
}

/// Per-line metrics in insertion order.
///
/// Duplicate line numbers are allowed; the overlay keeps the first one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSet {
    metrics: Vec<LineMetric>,
}

impl MetricSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            metrics: Vec::new(),
        }
    }

    pub fn push(&mut self, metric: LineMetric) {
        self.metrics.push(metric);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineMetric> {
        self.metrics.iter()
    }
}

impl FromIterator<LineMetric> for MetricSet {
    fn from_iter<I: IntoIterator<Item = LineMetric>>(iter: I) -> Self {
        Self {
            metrics: iter.into_iter().collect(),
        }
    }
}

impl Extend<LineMetric> for MetricSet {
    fn extend<I: IntoIterator<Item = LineMetric>>(&mut self, iter: I) {
        self.metrics.extend(iter);
    }
}

impl<'a> IntoIterator for &'a MetricSet {
    type Item = &'a LineMetric;
    type IntoIter = std::slice::Iter<'a, LineMetric>;

    fn into_iter(self) -> Self::IntoIter {
        self.metrics.iter()
    }
}

/// Which line a view should present first after binding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationDirective {
    /// 1-based line; 0 means no navigation
    pub target_line: u32,
}

impl NavigationDirective {
    #[must_use]
    pub const fn scroll_target(&self) -> Option<u32> {
        if self.target_line == 0 {
            None
        } else {
            Some(self.target_line)
        }
    }
}
